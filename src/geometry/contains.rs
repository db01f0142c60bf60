//! Ray-casting point-in-ring test.
//!
//! Boundary-exclusive: a point lying exactly on an edge or a vertex is
//! reported as outside. The on-edge check is exact (no tolerance).

use crate::models::{Coordinate, Ring};

/// True when `point` lies strictly inside `ring`
pub fn ring_contains(ring: &Ring, point: Coordinate) -> bool {
    points_contain(ring.points(), point)
}

/// Same as [`ring_contains`] on a raw closed point sequence. The caller
/// guarantees the sequence is closed; nothing is validated here.
pub fn points_contain(points: &[Coordinate], point: Coordinate) -> bool {
    let mut inside = false;

    for edge in points.windows(2) {
        let (a, b) = (edge[0], edge[1]);

        if on_segment(a, b, point) {
            return false;
        }

        // Half-open rule on latitude so a vertex shared by two edges is counted once
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let crossing_lon = a.lon + (point.lat - a.lat) * (b.lon - a.lon) / (b.lat - a.lat);
            if point.lon < crossing_lon {
                inside = !inside;
            }
        }
    }

    inside
}

fn on_segment(a: Coordinate, b: Coordinate, p: Coordinate) -> bool {
    let cross = (b.lon - a.lon) * (p.lat - a.lat) - (b.lat - a.lat) * (p.lon - a.lon);
    if cross != 0.0 {
        return false;
    }
    p.lon >= a.lon.min(b.lon)
        && p.lon <= a.lon.max(b.lon)
        && p.lat >= a.lat.min(b.lat)
        && p.lat <= a.lat.max(b.lat)
}
