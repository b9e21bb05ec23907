use std::collections::HashSet;

use tracing::warn;

use crate::math::distance_2d::distance;
use crate::math::Point2;
use crate::plan::Edge;

/// A walk reconstructed from directed edges.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedLoop {
    pub points: Vec<Point2>,
    /// Whether the walk returned to its first point.
    pub closed: bool,
}

/// Stitches an unordered set of directed edges into walks.
///
/// Each walk is seeded with the first remaining edge, then repeatedly
/// extended by the edge whose start is nearest the current last point
/// (within `tolerance`). Among candidates within tolerance, an edge owned by
/// a wall the walk has not visited yet wins over nearness, so a vertex shared
/// by several walls routes the walk through all of them. When no start
/// qualifies, an edge whose end is near the last point is taken reversed. A
/// walk ends when the next edge would return to its first point, when
/// nothing qualifies, or after `cap` steps. Walks continue to be seeded until
/// every edge has been consumed, so the result may hold zero, one, or
/// several loops.
#[must_use]
pub fn stitch_loops(edges: &[Edge], tolerance: f64, cap: usize) -> Vec<StitchedLoop> {
    let mut pool: Vec<Edge> = edges.to_vec();
    let mut loops = Vec::new();

    while !pool.is_empty() {
        let seed = pool.remove(0);
        loops.push(walk(seed, &mut pool, tolerance, cap));
    }

    loops
}

fn walk(seed: Edge, pool: &mut Vec<Edge>, tolerance: f64, cap: usize) -> StitchedLoop {
    let first = seed.start;
    let mut points = vec![seed.start, seed.end];
    let mut visited: HashSet<String> = HashSet::from([seed.owner_wall_id]);
    let mut closed = false;

    for _ in 0..cap {
        let last = points[points.len() - 1];
        let next = match nearest(pool, &last, tolerance, &visited, |e| e.start) {
            Some(idx) => pool.remove(idx),
            None => match nearest(pool, &last, tolerance, &visited, |e| e.end) {
                Some(idx) => pool.remove(idx).reversed(),
                None => break,
            },
        };
        if distance(&next.end, &first) <= tolerance {
            closed = true;
            break;
        }
        points.push(next.end);
        visited.insert(next.owner_wall_id);
    }

    if !closed && !pool.is_empty() {
        warn!(
            points = points.len(),
            remaining = pool.len(),
            "edge walk stopped before closing"
        );
    }

    StitchedLoop { points, closed }
}

/// Index of the edge whose `key` point lies within `tolerance` of `target`,
/// preferring unvisited owners and then the nearest point.
fn nearest(
    pool: &[Edge],
    target: &Point2,
    tolerance: f64,
    visited: &HashSet<String>,
    key: impl Fn(&Edge) -> Point2,
) -> Option<usize> {
    pool.iter()
        .enumerate()
        .map(|(i, e)| (i, visited.contains(&e.owner_wall_id), distance(&key(e), target)))
        .filter(|&(_, _, d)| d <= tolerance)
        .min_by(|a, b| a.1.cmp(&b.1).then(a.2.total_cmp(&b.2)))
        .map(|(i, _, _)| i)
}
