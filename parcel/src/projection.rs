// Geographic <-> canvas projection with viewport fitting.
// The latitude axis flips: north grows upward, canvas y grows downward.

use crate::geometry::tolerance::FIT_PADDING;
use crate::model::{GeoPoint, GeometryBounds, ProjectionParams, ViewTransform};

pub struct MapProjection {
    bounds: Option<GeometryBounds>,
    width: f64,
    height: f64,
    padding: f64,
    params: ProjectionParams,
}

impl Default for MapProjection {
    fn default() -> Self {
        MapProjection::new()
    }
}

impl MapProjection {
    pub fn new() -> MapProjection {
        MapProjection {
            bounds: None,
            width: 800.0,
            height: 600.0,
            padding: FIT_PADDING,
            params: ProjectionParams::default(),
        }
    }

    pub fn bounds(&self) -> Option<GeometryBounds> {
        self.bounds
    }

    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.fit_to_view();
    }

    pub fn set_bounds(&mut self, bounds: GeometryBounds) {
        self.bounds = Some(bounds);
        self.fit_to_view();
    }

    // Total and idempotent. A zero-width or zero-height box keeps the prior
    // params so a single-point dataset never derails the fit.
    fn fit_to_view(&mut self) {
        let b = match self.bounds {
            Some(b) => b,
            None => return,
        };
        let map_w = b.width();
        let map_h = b.height();
        if map_w == 0.0 || map_h == 0.0 {
            return;
        }

        let avail_w = self.width - self.padding * 2.0;
        let avail_h = self.height - self.padding * 2.0;
        let scale = (avail_w / map_w).min(avail_h / map_h);

        self.params = ProjectionParams {
            scale,
            offset_x: (self.width - map_w * scale) / 2.0,
            offset_y: (self.height - map_h * scale) / 2.0,
        };
    }

    /// (0, 0) until bounds are set.
    pub fn geo_to_canvas(&self, lon: f64, lat: f64) -> (f64, f64) {
        let b = match self.bounds {
            Some(b) => b,
            None => return (0.0, 0.0),
        };
        let x = (lon - b.min_lon) * self.params.scale + self.params.offset_x;
        let y = (b.max_lat - lat) * self.params.scale + self.params.offset_y;
        (x, y)
    }

    /// Exact algebraic inverse of `geo_to_canvas`. (0, 0) until bounds are set.
    pub fn canvas_to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let b = match self.bounds {
            Some(b) => b,
            None => return (0.0, 0.0),
        };
        let lon = (x - self.params.offset_x) / self.params.scale + b.min_lon;
        let lat = b.max_lat - (y - self.params.offset_y) / self.params.scale;
        (lon, lat)
    }

    /// Pointer position in stage space -> geographic: undoes the external
    /// pan/zoom, then inverts the projection. `view.zoom` must be nonzero.
    pub fn view_pointer_to_geo(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        view: &ViewTransform,
    ) -> (f64, f64) {
        let cx = (pointer_x - view.pan_x) / view.zoom;
        let cy = (pointer_y - view.pan_y) / view.zoom;
        self.canvas_to_geo(cx, cy)
    }

    /// Flat [x1, y1, x2, y2, ...] drawing coordinates for a ring, in order.
    pub fn ring_to_flat_points(&self, ring: &[GeoPoint]) -> Vec<f64> {
        let mut out = Vec::with_capacity(ring.len() * 2);
        for p in ring {
            let (x, y) = self.geo_to_canvas(p.lon, p.lat);
            out.push(x);
            out.push(y);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> MapProjection {
        let mut proj = MapProjection::new();
        proj.set_viewport(800.0, 600.0);
        proj.set_bounds(GeometryBounds {
            min_lon: 100.0,
            max_lon: 120.0,
            min_lat: 20.0,
            max_lat: 40.0,
        });
        proj
    }

    #[test]
    fn fit_centers_box_and_preserves_aspect() {
        let proj = fitted();
        let p = proj.params();
        // 20x20 box into 720x520 available: height binds at 26 px/deg
        assert!((p.scale - 26.0).abs() < 1e-12);
        assert!((p.offset_x - (800.0 - 20.0 * 26.0) / 2.0).abs() < 1e-12);
        assert!((p.offset_y - (600.0 - 20.0 * 26.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn geo_canvas_round_trip() {
        let proj = fitted();
        let (x, y) = proj.geo_to_canvas(111.3, 27.85);
        let (lon, lat) = proj.canvas_to_geo(x, y);
        assert!((lon - 111.3).abs() < 1e-9);
        assert!((lat - 27.85).abs() < 1e-9);
    }

    #[test]
    fn latitude_axis_is_inverted() {
        let proj = fitted();
        let (_, y_south) = proj.geo_to_canvas(110.0, 20.0);
        let (_, y_north) = proj.geo_to_canvas(110.0, 40.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn no_bounds_projects_to_origin() {
        let proj = MapProjection::new();
        assert_eq!(proj.geo_to_canvas(116.0, 39.0), (0.0, 0.0));
        assert_eq!(proj.canvas_to_geo(400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn degenerate_box_keeps_prior_params() {
        let mut proj = fitted();
        let before = proj.params();
        proj.set_bounds(GeometryBounds {
            min_lon: 5.0,
            max_lon: 5.0,
            min_lat: 1.0,
            max_lat: 3.0,
        });
        assert_eq!(proj.params(), before);
    }

    #[test]
    fn pointer_round_trips_through_view_transform() {
        let proj = fitted();
        let view = ViewTransform {
            pan_x: 37.5,
            pan_y: -12.0,
            zoom: 1.75,
        };
        let (cx, cy) = proj.geo_to_canvas(104.2, 33.1);
        let px = cx * view.zoom + view.pan_x;
        let py = cy * view.zoom + view.pan_y;
        let (lon, lat) = proj.view_pointer_to_geo(px, py, &view);
        assert!((lon - 104.2).abs() < 1e-9);
        assert!((lat - 33.1).abs() < 1e-9);
    }

    #[test]
    fn flat_points_preserve_vertex_order() {
        let proj = fitted();
        let ring = vec![
            GeoPoint::new(100.0, 20.0),
            GeoPoint::new(120.0, 20.0),
            GeoPoint::new(120.0, 40.0),
            GeoPoint::new(100.0, 20.0),
        ];
        let flat = proj.ring_to_flat_points(&ring);
        assert_eq!(flat.len(), 8);
        let (x0, y0) = proj.geo_to_canvas(100.0, 20.0);
        assert_eq!(flat[0], x0);
        assert_eq!(flat[1], y0);
        assert_eq!(flat[6], x0);
        assert_eq!(flat[7], y0);
    }
}
