use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

fn new_obj() -> Object {
    Object::new()
}

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err(
        "non_finite",
        format!("parameter '{}' must be finite", param),
        Some(d.into()),
    )
}

#[inline]
pub fn too_short(kind: &str, min: usize, got: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "min", &JsValue::from_f64(min as f64));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err(
        "too_short",
        format!("{} needs at least {} points, got {}", kind, min, got),
        Some(d.into()),
    )
}

#[inline]
pub fn odd_coords(kind: &str, len: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "len", &JsValue::from_f64(len as f64));
    err(
        "odd_coords",
        format!("{} expects [lon, lat, ...] pairs, got {} values", kind, len),
        Some(d.into()),
    )
}

#[inline]
pub fn zero_zoom() -> JsValue {
    err("zero_zoom", "view zoom must be nonzero", None)
}

#[inline]
pub fn no_bounds() -> JsValue {
    err("no_bounds", "no bounds derivable from empty coordinates", None)
}

#[inline]
pub fn split_failed() -> JsValue {
    err("split_failed", "no valid two-piece split for this cut", None)
}
