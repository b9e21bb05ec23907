use super::Point2;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    nalgebra::distance(p1, p2)
}

/// Returns the minimum distance from `point` to the segment `seg_start`→`seg_end`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, seg_start: &Point2, seg_end: &Point2) -> f64 {
    let d = seg_end - seg_start;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return distance(point, seg_start);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point - seg_start).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = seg_start + d * t;

    distance(point, &closest)
}

/// Returns the point reached by moving from `from` toward `to` by at most `max_dist`.
#[must_use]
pub fn clamp_toward(from: &Point2, to: &Point2, max_dist: f64) -> Point2 {
    let d = to - from;
    let len = d.norm();
    if len <= max_dist || len < f64::EPSILON {
        return *to;
    }
    from + d * (max_dist / len)
}
