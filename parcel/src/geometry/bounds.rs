// Axis-aligned bounds folds over coordinate sets and nested geometries.

use crate::geometry::tolerance::BOUNDS_PAD_FRAC;
use crate::model::{GeoPoint, Geometry, GeometryBounds};

// Fold accumulator. The +inf/-inf sentinel never escapes: an empty fold
// surfaces as None.
struct Fold {
    min_lon: f64,
    max_lon: f64,
    min_lat: f64,
    max_lat: f64,
}

impl Fold {
    fn new() -> Fold {
        Fold {
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    fn push(&mut self, p: &GeoPoint) {
        self.min_lon = self.min_lon.min(p.lon);
        self.max_lon = self.max_lon.max(p.lon);
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lat = self.max_lat.max(p.lat);
    }

    fn finish(self) -> Option<GeometryBounds> {
        if self.min_lon.is_infinite() {
            return None;
        }
        Some(GeometryBounds {
            min_lon: self.min_lon,
            max_lon: self.max_lon,
            min_lat: self.min_lat,
            max_lat: self.max_lat,
        })
    }
}

/// Tight box over a coordinate set. None iff the input is empty.
/// A zero-width or zero-height box (all points identical on an axis) is a
/// valid result, not an error.
pub fn bounds_of<'a, I>(coords: I) -> Option<GeometryBounds>
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    let mut fold = Fold::new();
    for p in coords {
        fold.push(p);
    }
    fold.finish()
}

/// Tight box over every coordinate reachable from one geometry.
pub fn bounds_of_geometry(geometry: &Geometry) -> Option<GeometryBounds> {
    let mut fold = Fold::new();
    geometry.for_each_coord(&mut |p| fold.push(p));
    fold.finish()
}

/// Tight box over every coordinate reachable from a set of geometries.
pub fn bounds_of_geometries<'a, I>(geometries: I) -> Option<GeometryBounds>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    let mut fold = Fold::new();
    for g in geometries {
        g.for_each_coord(&mut |p| fold.push(p));
    }
    fold.finish()
}

/// Expands a box by 5% of its width/height on each axis. Applied by callers
/// when fitting freshly loaded data, not baked into the raw folds.
pub fn padded(b: &GeometryBounds) -> GeometryBounds {
    let lon_pad = b.width() * BOUNDS_PAD_FRAC;
    let lat_pad = b.height() * BOUNDS_PAD_FRAC;
    GeometryBounds {
        min_lon: b.min_lon - lon_pad,
        max_lon: b.max_lon + lon_pad,
        min_lat: b.min_lat - lat_pad,
        max_lat: b.max_lat + lat_pad,
    }
}
