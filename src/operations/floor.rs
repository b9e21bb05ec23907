use tracing::debug;

use crate::math::distance_2d::distance;
use crate::math::intersect_2d::line_intersection;
use crate::math::polygon_2d::centroid_of_points;
use crate::math::Point2;
use crate::operations::corners::miter_corners;
use crate::operations::JoinParams;
use crate::plan::{Polygon, Wall};

/// Derives the interior floor polygon of a room from its walls' inner edges.
///
/// Each wall contributes the mitered thickness edge nearest the room
/// centroid. Those edges are ordered by angle around the centroid and
/// consecutive edge lines are intersected to form the polygon.
#[derive(Debug)]
pub struct FloorPolygon<'a> {
    walls: &'a [Wall],
    params: JoinParams,
}

/// A wall's inner thickness edge.
#[derive(Debug, Clone, Copy)]
struct InnerEdge {
    start: Point2,
    end: Point2,
    angle: f64,
}

impl<'a> FloorPolygon<'a> {
    /// Creates a new floor polygon operation with default parameters.
    #[must_use]
    pub fn new(walls: &'a [Wall]) -> Self {
        Self {
            walls,
            params: JoinParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: JoinParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the distance each vertex moves toward the room centroid.
    #[must_use]
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.params.floor_inset = inset;
        self
    }

    /// Executes the floor polygon construction.
    ///
    /// Returns `None` for fewer than two walls or when fewer than three inner
    /// edges (or polygon points) can be resolved.
    #[must_use]
    pub fn execute(&self) -> Option<Polygon> {
        if self.walls.len() < 2 {
            return None;
        }

        let endpoints: Vec<Point2> = self.walls.iter().flat_map(|w| [w.start, w.end]).collect();
        let centroid = centroid_of_points(&endpoints)?;

        let mut inner: Vec<InnerEdge> = miter_corners(self.walls, &self.params)
            .iter()
            .map(|corners| {
                let left = corners.left_edge();
                let right = corners.right_edge();
                let (start, end) = if distance(&nalgebra::center(&left.0, &left.1), &centroid)
                    <= distance(&nalgebra::center(&right.0, &right.1), &centroid)
                {
                    left
                } else {
                    right
                };
                let mid = nalgebra::center(&start, &end);
                InnerEdge {
                    start,
                    end,
                    angle: (mid.y - centroid.y).atan2(mid.x - centroid.x),
                }
            })
            .collect();

        if inner.len() < 3 {
            debug!(edges = inner.len(), "too few inner edges for a floor polygon");
            return None;
        }

        inner.sort_by(|a, b| a.angle.total_cmp(&b.angle));

        let n = inner.len();
        let mut points: Vec<Point2> = (0..n)
            .map(|i| corner_between(&inner[i], &inner[(i + 1) % n]))
            .collect();

        if points.len() < 3 {
            return None;
        }

        let inset = self.params.floor_inset;
        if inset > 0.0 {
            for p in &mut points {
                *p = toward(p, &centroid, inset);
            }
        }

        debug!(vertices = points.len(), inset, "built floor polygon");
        Some(Polygon::new(points))
    }
}

/// The vertex where two angularly adjacent inner edges meet.
///
/// Parallel edges fall back to the endpoint of `a` closest to any endpoint of `b`.
fn corner_between(a: &InnerEdge, b: &InnerEdge) -> Point2 {
    if let Some(p) = line_intersection(&a.start, &a.end, &b.start, &b.end) {
        return p;
    }
    let candidates = [
        (a.start, b.start),
        (a.start, b.end),
        (a.end, b.start),
        (a.end, b.end),
    ];
    candidates
        .iter()
        .min_by(|x, y| distance(&x.0, &x.1).total_cmp(&distance(&y.0, &y.1)))
        .map_or(a.end, |&(pa, _)| pa)
}

/// Moves `p` toward `target` by `step`, stopping at `target`.
fn toward(p: &Point2, target: &Point2, step: f64) -> Point2 {
    let d = target - p;
    let len = d.norm();
    if len <= step {
        *target
    } else {
        p + d * (step / len)
    }
}
