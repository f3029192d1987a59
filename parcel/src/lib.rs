pub mod model;
pub mod projection;
pub mod geometry {
    pub mod bounds;
    pub mod intersect;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod locate;
    pub mod split;
}

pub use algorithms::locate::{centroid, point_in_polygon};
pub use algorithms::split::split_ring;
pub use geometry::bounds::{bounds_of, bounds_of_geometries, bounds_of_geometry, padded};
pub use model::{GeoPoint, Geometry, GeometryBounds, ProjectionParams, Ring, ViewTransform};
pub use projection::MapProjection;
