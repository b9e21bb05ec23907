use super::{cross, Point2, Vector2, PARALLEL_EPSILON};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Lines whose direction determinant is below [`PARALLEL_EPSILON`] in magnitude
/// are treated as parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let det = cross(d1, d2);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let dp = p2 - p1;
    let t = cross(&dp, d2) / det;
    let u = cross(&dp, d1) / det;
    Some((t, u))
}

/// Intersection of the infinite lines through `a_start`/`a_end` and
/// `b_start`/`b_end`.
///
/// The result may lie outside both segments. Returns `None` for parallel or
/// coincident lines.
#[must_use]
pub fn line_intersection(
    a_start: &Point2,
    a_end: &Point2,
    b_start: &Point2,
    b_end: &Point2,
) -> Option<Point2> {
    let da = a_end - a_start;
    let db = b_end - b_start;
    let (t, _u) = line_line_intersect_2d(a_start, &da, b_start, &db)?;
    Some(a_start + da * t)
}
