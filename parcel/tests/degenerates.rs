use parcel::model::{GeoPoint, Geometry, GeometryBounds};
use parcel::{bounds_of, centroid, padded, point_in_polygon, split_ring, MapProjection};

fn p(lon: f64, lat: f64) -> GeoPoint {
    GeoPoint::new(lon, lat)
}

#[test]
fn single_point_bounds_are_zero_sized_and_pad_free() {
    let coords = vec![p(7.0, -3.0)];
    let b = bounds_of(&coords).expect("bounds");
    assert_eq!(b.width(), 0.0);
    assert_eq!(b.height(), 0.0);
    // 5% of zero is zero: padding a degenerate box is a no-op.
    assert_eq!(padded(&b), b);
}

#[test]
fn fitting_zero_sized_bounds_never_moves_params() {
    let mut proj = MapProjection::new();
    let initial = proj.params();
    proj.set_bounds(GeometryBounds {
        min_lon: 7.0,
        max_lon: 7.0,
        min_lat: -3.0,
        max_lat: -3.0,
    });
    assert_eq!(proj.params(), initial);
    // Viewport changes over a degenerate box are equally inert.
    proj.set_viewport(1024.0, 768.0);
    assert_eq!(proj.params(), initial);
}

#[test]
fn flat_points_before_bounds_are_all_zero() {
    let proj = MapProjection::new();
    let ring = vec![p(1.0, 2.0), p(3.0, 4.0), p(5.0, 6.0), p(1.0, 2.0)];
    let flat = proj.ring_to_flat_points(&ring);
    assert_eq!(flat, vec![0.0; 8]);
}

#[test]
fn splitter_rejects_underspecified_inputs() {
    let triangle_open = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.5, 1.0)];
    assert!(split_ring(&triangle_open, &[p(0.5, -1.0), p(0.5, 2.0)]).is_none());

    let square = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
    assert!(split_ring(&square, &[]).is_none());
    assert!(split_ring(&square, &[p(0.5, 0.5)]).is_none());
}

#[test]
fn centroid_degenerates_without_nan() {
    let g = Geometry::Polygon(vec![vec![p(2.0, 2.0); 4]]);
    assert_eq!(centroid(&g), Some(p(2.0, 2.0)));
}

#[test]
fn containment_on_degenerate_ring_is_false() {
    let collapsed = vec![p(1.0, 1.0); 4];
    assert!(!point_in_polygon(&p(1.0, 1.0), &collapsed));
    assert!(!point_in_polygon(&p(0.0, 0.0), &collapsed));
}
