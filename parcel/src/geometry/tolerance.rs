// Centralized tolerances and fit constants for the editor core

pub const EPS_COORD: f64 = 1e-9; // coordinate coincidence / segment parameter slack
pub const EPS_DENOM: f64 = 1e-12; // parallel-segment denominator guard
pub const BOUNDS_PAD_FRAC: f64 = 0.05; // padded-bounds expansion per axis
pub const FIT_PADDING: f64 = 40.0; // default viewport fit padding (px)
pub const CUT_EXTEND_FACTOR: f64 = 100.0; // straight-cut rescue extension

#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

#[inline]
pub fn near_zero(x: f64, eps: f64) -> bool {
    x.abs() < eps
}

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
