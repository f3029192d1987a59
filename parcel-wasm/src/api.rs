use crate::error;
use crate::interop;
use crate::MapView;
use js_sys::Float64Array;
use parcel::model::{GeoPoint, Geometry, GeometryBounds, ViewTransform};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Coordinates cross the boundary as flat [lon, lat, ...] pairs.
fn points_from_flat(flat: &[f64]) -> Vec<GeoPoint> {
    flat.chunks_exact(2)
        .map(|c| GeoPoint { lon: c[0], lat: c[1] })
        .collect()
}

fn flat_from_points(points: &[GeoPoint]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.lon);
        out.push(p.lat);
    }
    out
}

#[wasm_bindgen]
impl MapView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MapView {
        MapView {
            inner: parcel::MapProjection::new(),
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.inner.set_viewport(width, height);
    }

    pub fn set_bounds(&mut self, min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) {
        self.inner.set_bounds(GeometryBounds {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        });
    }

    pub fn set_bounds_res(
        &mut self,
        min_lon: f64,
        max_lon: f64,
        min_lat: f64,
        max_lat: f64,
    ) -> JsValue {
        for (name, v) in [
            ("min_lon", min_lon),
            ("max_lon", max_lon),
            ("min_lat", min_lat),
            ("max_lat", max_lat),
        ] {
            if !v.is_finite() {
                return error::non_finite(name);
            }
        }
        if min_lon > max_lon || min_lat > max_lat {
            return error::err("invalid_bounds", "min must not exceed max", None);
        }
        self.set_bounds(min_lon, max_lon, min_lat, max_lat);
        error::ok(JsValue::TRUE)
    }

    /// Current fit as {scale, offsetX, offsetY}.
    pub fn fit_params(&self) -> JsValue {
        let p = self.inner.params();
        let o = interop::new_obj();
        interop::set_kv(&o, "scale", &JsValue::from_f64(p.scale));
        interop::set_kv(&o, "offsetX", &JsValue::from_f64(p.offset_x));
        interop::set_kv(&o, "offsetY", &JsValue::from_f64(p.offset_y));
        o.into()
    }

    pub fn geo_to_canvas(&self, lon: f64, lat: f64) -> Float64Array {
        let (x, y) = self.inner.geo_to_canvas(lon, lat);
        interop::arr_f64(&[x, y])
    }

    pub fn canvas_to_geo(&self, x: f64, y: f64) -> Float64Array {
        let (lon, lat) = self.inner.canvas_to_geo(x, y);
        interop::arr_f64(&[lon, lat])
    }

    pub fn view_pointer_to_geo(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        pan_x: f64,
        pan_y: f64,
        zoom: f64,
    ) -> Float64Array {
        let view = ViewTransform { pan_x, pan_y, zoom };
        let (lon, lat) = self.inner.view_pointer_to_geo(pointer_x, pointer_y, &view);
        interop::arr_f64(&[lon, lat])
    }

    pub fn view_pointer_to_geo_res(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        pan_x: f64,
        pan_y: f64,
        zoom: f64,
    ) -> JsValue {
        for (name, v) in [
            ("pointer_x", pointer_x),
            ("pointer_y", pointer_y),
            ("pan_x", pan_x),
            ("pan_y", pan_y),
            ("zoom", zoom),
        ] {
            if !v.is_finite() {
                return error::non_finite(name);
            }
        }
        if zoom == 0.0 {
            return error::zero_zoom();
        }
        error::ok(
            self.view_pointer_to_geo(pointer_x, pointer_y, pan_x, pan_y, zoom)
                .into(),
        )
    }

    pub fn ring_to_flat_points(&self, ring: &[f64]) -> Float64Array {
        let points = points_from_flat(ring);
        interop::arr_f64(&self.inner.ring_to_flat_points(&points))
    }
}

/// Split a closed ring along a cut polyline. Returns {a, b} with flat
/// coordinate arrays, or null when no valid split exists.
#[wasm_bindgen]
pub fn split_ring(ring: &[f64], cut_line: &[f64]) -> JsValue {
    let ring_pts = points_from_flat(ring);
    let cut_pts = points_from_flat(cut_line);
    match parcel::split_ring(&ring_pts, &cut_pts) {
        Some((a, b)) => serde_wasm_bindgen::to_value(&serde_json::json!({
            "a": flat_from_points(&a),
            "b": flat_from_points(&b),
        }))
        .unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn split_ring_res(ring: &[f64], cut_line: &[f64]) -> JsValue {
    if ring.len() % 2 != 0 {
        return error::odd_coords("ring", ring.len());
    }
    if cut_line.len() % 2 != 0 {
        return error::odd_coords("cut_line", cut_line.len());
    }
    if ring.len() < 8 {
        return error::too_short("ring", 4, ring.len() / 2);
    }
    if cut_line.len() < 4 {
        return error::too_short("cut_line", 2, cut_line.len() / 2);
    }
    let v = split_ring(ring, cut_line);
    if v.is_null() {
        web_sys::console::warn_1(&JsValue::from_str("split_ring: no valid two-piece split"));
        return error::split_failed();
    }
    error::ok(v)
}

#[wasm_bindgen]
pub fn point_in_polygon(lon: f64, lat: f64, ring: &[f64]) -> bool {
    let ring_pts = points_from_flat(ring);
    parcel::point_in_polygon(&GeoPoint { lon, lat }, &ring_pts)
}

/// Centroid of a single-ring polygon as [lon, lat], or null.
#[wasm_bindgen]
pub fn ring_centroid(ring: &[f64]) -> JsValue {
    let geometry = Geometry::Polygon(vec![points_from_flat(ring)]);
    match parcel::centroid(&geometry) {
        Some(c) => interop::arr_f64(&[c.lon, c.lat]).into(),
        None => JsValue::NULL,
    }
}

/// Bounds of a flat coordinate set as [minLon, maxLon, minLat, maxLat], or
/// null for empty input. `pad` applies the 5% load-time expansion.
#[wasm_bindgen]
pub fn bounds_of_coords(coords: &[f64], pad: bool) -> JsValue {
    let points = points_from_flat(coords);
    match parcel::bounds_of(&points) {
        Some(b) => {
            let b = if pad { parcel::padded(&b) } else { b };
            interop::arr_f64(&[b.min_lon, b.max_lon, b.min_lat, b.max_lat]).into()
        }
        None => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn bounds_of_coords_res(coords: &[f64], pad: bool) -> JsValue {
    if coords.len() % 2 != 0 {
        return error::odd_coords("coords", coords.len());
    }
    if coords.is_empty() {
        return error::no_bounds();
    }
    error::ok(bounds_of_coords(coords, pad))
}
