// Segment-segment intersection primitive for the cut algorithm.
// Parallel and collinear pairs report no hit: a cut running exactly along a
// boundary edge is a documented blind spot, not an error.

use crate::geometry::tolerance::{clamp01, EPS_COORD, EPS_DENOM};
use crate::model::GeoPoint;

#[derive(Debug, Clone, Copy)]
pub struct SegHit {
    pub point: GeoPoint,
    /// Parametric position on the first segment, clamped to [0, 1].
    pub t: f64,
    /// Parametric position on the second segment, clamped to [0, 1].
    pub s: f64,
}

/// Intersection of segments (p1, p2) and (p3, p4). Hits at or very near
/// segment endpoints are accepted (EPS_COORD slack) rather than lost to
/// floating-point noise.
pub fn segment_intersection(
    p1: GeoPoint,
    p2: GeoPoint,
    p3: GeoPoint,
    p4: GeoPoint,
) -> Option<SegHit> {
    let d1x = p2.lon - p1.lon;
    let d1y = p2.lat - p1.lat;
    let d2x = p4.lon - p3.lon;
    let d2y = p4.lat - p3.lat;

    let denom = d1x * d2y - d1y * d2x;
    if denom.abs() < EPS_DENOM {
        return None;
    }

    let t = ((p3.lon - p1.lon) * d2y - (p3.lat - p1.lat) * d2x) / denom;
    let s = ((p3.lon - p1.lon) * d1y - (p3.lat - p1.lat) * d1x) / denom;

    if t < -EPS_COORD || t > 1.0 + EPS_COORD || s < -EPS_COORD || s > 1.0 + EPS_COORD {
        return None;
    }

    Some(SegHit {
        point: GeoPoint {
            lon: p1.lon + t * d1x,
            lat: p1.lat + t * d1y,
        },
        t: clamp01(t),
        s: clamp01(s),
    })
}
