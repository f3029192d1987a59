// Selection/labeling helpers: even-odd containment and geometry centroids.

use crate::geometry::bounds::bounds_of_geometry;
use crate::model::{GeoPoint, Geometry};

/// Even-odd ray cast over consecutive ring edges, closing edge included.
/// A point exactly on an edge may land on either side; boundary membership
/// is undefined here, as usual for ray casting.
pub fn point_in_polygon(point: &GeoPoint, ring: &[GeoPoint]) -> bool {
    if ring.is_empty() {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lon, ring[i].lat);
        let (xj, yj) = (ring[j].lon, ring[j].lat);
        if (yi > point.lat) != (yj > point.lat)
            && point.lon < (xj - xi) * (point.lat - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of every coordinate reachable from the geometry. A
/// non-finite mean falls back to the bounds midpoint; None means the
/// geometry holds no coordinates and has no bounds either.
pub fn centroid(geometry: &Geometry) -> Option<GeoPoint> {
    let mut sum_lon = 0.0;
    let mut sum_lat = 0.0;
    let mut count = 0usize;
    geometry.for_each_coord(&mut |p| {
        sum_lon += p.lon;
        sum_lat += p.lat;
        count += 1;
    });
    if count == 0 {
        return None;
    }

    let lon = sum_lon / count as f64;
    let lat = sum_lat / count as f64;
    if lon.is_finite() && lat.is_finite() {
        return Some(GeoPoint { lon, lat });
    }
    bounds_of_geometry(geometry).map(|b| b.center())
}
