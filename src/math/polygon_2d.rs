use super::distance_2d::distance;
use super::{cross, Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned area of a closed polygon, independent of winding.
#[must_use]
pub fn area(points: &[Point2]) -> f64 {
    signed_area(points).abs()
}

/// Total edge length of a closed polygon, including the closing edge.
#[must_use]
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

/// Arithmetic mean of a point set, or `None` when empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid_of_points(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Some(Point2::from(sum / points.len() as f64))
}

/// Returns the polygon with counter-clockwise winding, reversing if needed.
#[must_use]
pub fn ensure_ccw(points: &[Point2]) -> Vec<Point2> {
    let mut out = points.to_vec();
    if signed_area(points) < 0.0 {
        out.reverse();
    }
    out
}

/// Tests whether `p3` lies on the line through `p1` and `p2`.
///
/// Uses the magnitude of the cross product of `p2 - p1` and `p3 - p1`, so
/// `tol` scales with the lengths involved.
#[must_use]
pub fn collinear(p1: &Point2, p2: &Point2, p3: &Point2, tol: f64) -> bool {
    cross(&(p2 - p1), &(p3 - p1)).abs() < tol
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn area_ignores_winding() {
        let mut pts = unit_square();
        assert!((area(&pts) - 1.0).abs() < TOLERANCE);
        pts.reverse();
        assert!((area(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_closes_the_loop() {
        assert!((perimeter(&unit_square()) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square_corners() {
        let c = centroid_of_points(&unit_square()).unwrap();
        assert!((c.x - 0.5).abs() < TOLERANCE && (c.y - 0.5).abs() < TOLERANCE);
        assert!(centroid_of_points(&[]).is_none());
    }

    #[test]
    fn ensure_ccw_reverses_clockwise_input() {
        let mut pts = unit_square();
        pts.reverse();
        let fixed = ensure_ccw(&pts);
        assert!(signed_area(&fixed) > 0.0);
        let unchanged = ensure_ccw(&unit_square());
        assert_eq!(unchanged, unit_square());
    }

    #[test]
    fn collinear_detects_midpoint() {
        assert!(collinear(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), 1e-9));
        assert!(!collinear(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0), 1e-9));
    }

    #[test]
    fn segment_direction_normalizes() {
        let d = segment_direction(&p(0.0, 0.0), &p(3.0, 4.0)).unwrap();
        assert!((d.x - 0.6).abs() < TOLERANCE && (d.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length_fails() {
        assert!(segment_direction(&p(1.0, 1.0), &p(1.0, 1.0)).is_err());
    }

    #[test]
    fn left_normal_rotates_ccw() {
        let n = left_normal(&Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < TOLERANCE && (n.y - 1.0).abs() < TOLERANCE);
    }
}
