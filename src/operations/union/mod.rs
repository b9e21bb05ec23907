//! Merging connected walls into single outer-boundary polygons.

pub mod partition;
pub mod stitch;

pub use partition::connected_components;
pub use stitch::{stitch_loops, StitchedLoop};

use tracing::debug;

use crate::math::distance_2d::distance;
use crate::math::polygon_2d::area;
use crate::operations::corners::bevel_wall;
use crate::operations::junction::detect_junctions;
use crate::operations::JoinParams;
use crate::plan::{Edge, Polygon, Wall};

/// Merges walls into one outline polygon per connected group.
///
/// Each wall's beveled quadrilateral contributes four directed edges. Edges
/// matched by an opposite edge (shared junction faces) cancel; the remaining
/// outer edges are stitched back into a closed walk.
#[derive(Debug)]
pub struct WallUnion<'a> {
    walls: &'a [Wall],
    params: JoinParams,
}

impl<'a> WallUnion<'a> {
    /// Creates a new wall union operation with default parameters.
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

    /// Executes the union, returning one outline per connected component.
    ///
    /// Components that yield no usable edges are skipped.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon> {
        let components = connected_components(self.walls, self.params.junction_tolerance);
        debug!(
            walls = self.walls.len(),
            components = components.len(),
            "partitioned walls"
        );

        components
            .iter()
            .filter_map(|indices| {
                let group: Vec<Wall> = indices.iter().map(|&i| self.walls[i].clone()).collect();
                self.trace_component(&group)
            })
            .collect()
    }

    /// Traces the outline of a single connected wall group.
    ///
    /// When stitching yields several walks, the closed one enclosing the
    /// largest area wins; with no closed walk, the longest open one is kept.
    #[must_use]
    pub fn trace_component(&self, walls: &[Wall]) -> Option<Polygon> {
        let edges = outer_edges(walls, &self.params);
        if edges.is_empty() {
            return None;
        }

        let loops = stitch_loops(&edges, self.params.junction_tolerance, 2 * edges.len());
        if loops.len() > 1 {
            debug!(
                loops = loops.len(),
                "component stitched into several walks, keeping one"
            );
        }

        let best = loops
            .iter()
            .filter(|l| l.closed)
            .max_by(|a, b| area(&a.points).total_cmp(&area(&b.points)))
            .or_else(|| loops.iter().max_by_key(|l| l.points.len()))?;

        debug!(
            vertices = best.points.len(),
            closed = best.closed,
            "traced wall outline"
        );
        Some(Polygon::new(best.points.clone()))
    }
}

/// Boundary edges of the beveled wall quads that have no opposite twin.
#[must_use]
pub fn outer_edges(walls: &[Wall], params: &JoinParams) -> Vec<Edge> {
    let tol = params.junction_tolerance;
    let table = detect_junctions(walls, tol);
    let all: Vec<Edge> = (0..walls.len())
        .flat_map(|i| bevel_wall(walls, i, &table, params.bevel_dot_threshold).edges())
        .collect();

    all.iter()
        .enumerate()
        .filter(|&(i, e)| {
            !all.iter().enumerate().any(|(j, other)| {
                j != i
                    && distance(&other.start, &e.end) <= tol
                    && distance(&other.end, &e.start) <= tol
            })
        })
        .map(|(_, e)| e.clone())
        .collect()
}
