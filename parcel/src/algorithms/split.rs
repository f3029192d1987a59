// Splits a closed ring along a cutting polyline into two closed rings.
//
// Simplifications carried over from the editor's cut-gesture model:
// - only the first and last crossings along the cut define the split; a cut
//   crossing the boundary more than twice silently loses the geometry
//   between intermediate crossings (callers assume exactly two output rings)
// - a two-point cut that misses is retried once with the segment extended
//   100x its length past each end ("drawn short but meant to cut through")
// - a cut running collinearly along a boundary edge is never detected

use crate::geometry::intersect::segment_intersection;
use crate::geometry::tolerance::CUT_EXTEND_FACTOR;
use crate::model::{GeoPoint, Ring};

// Transient crossing record; lives only within one split call.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    point: GeoPoint,
    cut_index: usize,
    cut_t: f64,
    ring_edge: usize,
    ring_t: f64,
}

/// Splits `ring` (closed, >= 4 points) along `cut_line` (>= 2 points).
/// Returns the two replacement rings, or None when no valid two-piece split
/// exists. Never mutates the input; never panics on well-typed input.
pub fn split_ring(ring: &[GeoPoint], cut_line: &[GeoPoint]) -> Option<(Ring, Ring)> {
    split_inner(ring, cut_line, true)
}

fn split_inner(ring: &[GeoPoint], cut_line: &[GeoPoint], allow_extend: bool) -> Option<(Ring, Ring)> {
    if ring.len() < 4 || cut_line.len() < 2 {
        return None;
    }

    let crossings = collect_crossings(ring, cut_line);
    if crossings.len() < 2 {
        // One rescue attempt for straight cuts only; a second miss is terminal.
        if allow_extend && cut_line.len() == 2 {
            let extended = extend_segment(cut_line[0], cut_line[1], CUT_EXTEND_FACTOR);
            return split_inner(ring, &extended, false);
        }
        return None;
    }

    // Entry/exit pair: earliest and latest crossing along the cut line.
    let entry = crossings[0];
    let exit = crossings[crossings.len() - 1];

    let inner = inner_cut_segment(cut_line, &entry, &exit);

    // Ring A: entry -> boundary arc -> exit -> cut walked back -> entry.
    let mut poly_a: Ring = Vec::new();
    poly_a.push(entry.point);
    poly_a.extend(boundary_arc(ring, entry.ring_edge, exit.ring_edge));
    poly_a.push(exit.point);
    poly_a.extend(inner[1..inner.len() - 1].iter().rev().copied());
    poly_a.push(entry.point);

    // Ring B: exit -> boundary arc -> entry -> cut walked forward -> exit.
    let mut poly_b: Ring = Vec::new();
    poly_b.push(exit.point);
    poly_b.extend(boundary_arc(ring, exit.ring_edge, entry.ring_edge));
    poly_b.push(entry.point);
    poly_b.extend(inner[1..inner.len() - 1].iter().copied());
    poly_b.push(exit.point);

    // Either side collapsing to a line or point fails the whole operation.
    if poly_a.len() < 4 || poly_b.len() < 4 {
        return None;
    }
    Some((poly_a, poly_b))
}

fn collect_crossings(ring: &[GeoPoint], cut_line: &[GeoPoint]) -> Vec<Crossing> {
    let mut crossings: Vec<Crossing> = Vec::new();
    for i in 0..cut_line.len() - 1 {
        for j in 0..ring.len() - 1 {
            let hit = match segment_intersection(cut_line[i], cut_line[i + 1], ring[j], ring[j + 1])
            {
                Some(hit) => hit,
                None => continue,
            };
            // Grazing a shared ring vertex yields one crossing, not two.
            if crossings.iter().any(|c| c.point.coincides(&hit.point)) {
                continue;
            }
            crossings.push(Crossing {
                point: hit.point,
                cut_index: i,
                cut_t: hit.t,
                ring_edge: j,
                ring_t: hit.s,
            });
        }
    }
    // Cut-line traversal order; ring position breaks exact ties.
    crossings.sort_by(|a, b| {
        a.cut_index
            .cmp(&b.cut_index)
            .then(a.cut_t.total_cmp(&b.cut_t))
            .then(a.ring_edge.cmp(&b.ring_edge))
            .then(a.ring_t.total_cmp(&b.ring_t))
    });
    crossings
}

// Cut-line portion between the two crossings, both crossing points included.
fn inner_cut_segment(cut_line: &[GeoPoint], entry: &Crossing, exit: &Crossing) -> Vec<GeoPoint> {
    let mut seg = Vec::with_capacity(exit.cut_index - entry.cut_index + 2);
    seg.push(entry.point);
    for i in entry.cut_index..exit.cut_index {
        seg.push(cut_line[i + 1]);
    }
    seg.push(exit.point);
    seg
}

// Forward walk along the boundary from just past `from_edge` to the start of
// `to_edge`, wrapping modulo the edge count. Entry and exit on the same edge
// walk the full circle: the forward direction is unconditional.
fn boundary_arc(ring: &[GeoPoint], from_edge: usize, to_edge: usize) -> Vec<GeoPoint> {
    let edge_count = ring.len() - 1;
    let mut arc = Vec::new();
    let mut idx = (from_edge + 1) % edge_count;
    while idx != to_edge {
        arc.push(ring[idx]);
        idx = (idx + 1) % edge_count;
    }
    if !arc.is_empty() || to_edge != from_edge {
        arc.push(ring[to_edge]);
    }
    arc
}

fn extend_segment(p1: GeoPoint, p2: GeoPoint, factor: f64) -> [GeoPoint; 2] {
    let dx = p2.lon - p1.lon;
    let dy = p2.lat - p1.lat;
    [
        GeoPoint {
            lon: p1.lon - dx * factor,
            lat: p1.lat - dy * factor,
        },
        GeoPoint {
            lon: p2.lon + dx * factor,
            lat: p2.lat + dy * factor,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat)
    }

    fn unit_square() -> Vec<GeoPoint> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)]
    }

    fn assert_ring_coincides(actual: &[GeoPoint], expected: &[GeoPoint]) {
        assert_eq!(actual.len(), expected.len(), "ring length");
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.coincides(e), "expected {:?}, got {:?}", e, a);
        }
    }

    #[test]
    fn vertical_cut_halves_the_square() {
        let (a, b) = split_ring(&unit_square(), &[p(0.5, -1.0), p(0.5, 2.0)]).expect("split");
        assert_ring_coincides(
            &a,
            &[p(0.5, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.5, 1.0), p(0.5, 0.0)],
        );
        assert_ring_coincides(
            &b,
            &[p(0.5, 1.0), p(0.0, 1.0), p(0.0, 0.0), p(0.5, 0.0), p(0.5, 1.0)],
        );
    }

    #[test]
    fn inputs_below_preconditions_fail() {
        let ring = unit_square();
        assert!(split_ring(&ring[..3], &[p(0.5, -1.0), p(0.5, 2.0)]).is_none());
        assert!(split_ring(&ring, &[p(0.5, -1.0)]).is_none());
    }

    #[test]
    fn boundary_arc_wraps_past_ring_start() {
        let ring = unit_square();
        // From the last edge back to edge 1, crossing index 0.
        assert_eq!(boundary_arc(&ring, 3, 1), vec![p(0.0, 0.0), p(1.0, 0.0)]);
        // Adjacent edges share exactly the connecting vertex.
        assert_eq!(boundary_arc(&ring, 0, 1), vec![p(1.0, 0.0)]);
        // Same edge walks the full circle back to its own start vertex.
        assert_eq!(
            boundary_arc(&ring, 2, 2),
            vec![p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]
        );
    }
}
