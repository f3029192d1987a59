use wasm_bindgen::prelude::*;

mod api;
mod error;
mod interop;

pub use api::*;

/// Projection state for one canvas, owned by the rendering host.
#[wasm_bindgen]
pub struct MapView {
    pub(crate) inner: parcel::MapProjection,
}
