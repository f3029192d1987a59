use serde::{Deserialize, Serialize};

use crate::geometry::tolerance::EPS_COORD;

/// Geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint { lon, lat }
    }

    /// Coincidence within EPS_COORD on both axes. Used for deduplication;
    /// exact equality is too strict for computed intersection points.
    pub fn coincides(&self, other: &GeoPoint) -> bool {
        (self.lon - other.lon).abs() < EPS_COORD && (self.lat - other.lat).abs() < EPS_COORD
    }
}

/// Closed polygon boundary: first point equals last point by value, len >= 4.
pub type Ring = Vec<GeoPoint>;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeometryBounds {
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lon: (self.min_lon + self.max_lon) * 0.5,
            lat: (self.min_lat + self.max_lat) * 0.5,
        }
    }

    pub fn contains(&self, p: &GeoPoint) -> bool {
        p.lon >= self.min_lon && p.lon <= self.max_lon && p.lat >= self.min_lat && p.lat <= self.max_lat
    }
}

/// Feature geometry as handed over by the ingestion collaborator.
/// Polygon rings follow the closed-ring convention above; holes are carried
/// for bounds/centroid purposes but the splitter only works on single rings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Geometry {
    Point(GeoPoint),
    MultiPoint(Vec<GeoPoint>),
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Visit every coordinate reachable from this geometry, at any nesting depth.
    pub fn for_each_coord<F: FnMut(&GeoPoint)>(&self, f: &mut F) {
        match self {
            Geometry::Point(p) => f(p),
            Geometry::MultiPoint(points) => points.iter().for_each(&mut *f),
            Geometry::Polygon(rings) => rings.iter().flatten().for_each(&mut *f),
            Geometry::MultiPolygon(polys) => polys.iter().flatten().flatten().for_each(&mut *f),
        }
    }
}

/// Scale/offset pair fitting the current bounds into the viewport.
/// Always recomputed as a whole, never patched field by field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        ProjectionParams {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Pan/zoom the canvas stage applies on top of projected coordinates.
/// Owned by the rendering collaborator; the engine only reads it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ViewTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}
