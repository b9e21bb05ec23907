use crate::math::polygon_2d::collinear;
use crate::math::Point2;

/// Removes interior vertices that are collinear with their neighbors.
///
/// The first and last vertices are always kept. Each interior vertex is
/// tested against its immediate neighbors in the input, not against
/// previously kept vertices.
#[must_use]
pub fn simplify(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(n);
    out.push(points[0]);
    for i in 1..n - 1 {
        if !collinear(&points[i - 1], &points[i], &points[i + 1], tolerance) {
            out.push(points[i]);
        }
    }
    out.push(points[n - 1]);
    out
}

/// Like [`simplify`], but treats the sequence as an implicitly closed
/// polygon so the first and last vertices are tested too.
///
/// Never reduces a polygon below three vertices.
#[must_use]
pub fn simplify_closed(points: &[Point2], tolerance: f64) -> Vec<Point2> {
    let n = points.len();
    if n <= 3 {
        return points.to_vec();
    }

    let kept: Vec<Point2> = (0..n)
        .filter(|&i| {
            let prev = &points[(i + n - 1) % n];
            let next = &points[(i + 1) % n];
            !collinear(prev, &points[i], next, tolerance)
        })
        .map(|i| points[i])
        .collect();

    if kept.len() < 3 {
        points.to_vec()
    } else {
        kept
    }
}
