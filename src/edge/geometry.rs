//! Edge geometry.
//!
//! Pure functions: the curved midpoint used as the control point of a
//! smoothed edge line, and the inset anchors where endpoint labels sit.

use crate::canvas::{CurvePoints, Point};

/// Control point between `src` and `dst`, pushed perpendicular to the
/// src→dst vector by `arc`.
///
/// With `arc == 0.0` this is the exact geometric midpoint and the line
/// renders straight. Parallel edges between the same pair use distinct arcs
/// so they stay distinguishable.
pub fn midpoint(src: Point, dst: Point, arc: f64) -> Point {
    let t = (dst.y - src.y).atan2(dst.x - src.x);
    Point::new(
        (src.x + dst.x) / 2.0 + arc * t.sin(),
        (src.y + dst.y) / 2.0 - arc * t.cos(),
    )
}

/// The three points of a line from `src` to `dst` with curvature `arc`
pub fn curve(src: Point, dst: Point, arc: f64) -> CurvePoints {
    CurvePoints {
        src,
        mid: midpoint(src, dst, arc),
        dst,
    }
}

/// Anchors for the source and destination labels of `line`.
///
/// Each anchor is moved from its endpoint toward the other one by
/// `distance` times the src→dst vector, so labels clear the node icons.
pub fn label_anchors(line: &CurvePoints, distance: f64) -> (Point, Point) {
    let ux = distance * (line.dst.x - line.src.x);
    let uy = distance * (line.dst.y - line.src.y);
    (
        Point::new(line.src.x + ux, line.src.y + uy),
        Point::new(line.dst.x - ux, line.dst.y - uy),
    )
}

/// Where the throughput label of `line` is centered
pub fn label_center(line: &CurvePoints) -> Point {
    Point::center(line.src, line.dst)
}
