//! Per-wall corner resolution at junctions.
//!
//! Two resolvers share the same output shape: [`miter`] computes exact edge
//! line intersections for any junction angle, [`bevel`] is a cheaper
//! approximation valid only near right angles.

pub mod bevel;
pub mod miter;

pub use bevel::bevel_wall;
pub use miter::miter_wall;

use super::junction::{detect_junctions, JunctionTable};
use super::JoinParams;
use crate::plan::{Wall, WallCorners};

/// Mitered corners for every wall, in input order.
#[must_use]
pub fn miter_corners(walls: &[Wall], params: &JoinParams) -> Vec<WallCorners> {
    let table = detect_junctions(walls, params.junction_tolerance);
    miter_corners_with(walls, &table, params)
}

/// Mitered corners using an already-built junction table.
#[must_use]
pub fn miter_corners_with(
    walls: &[Wall],
    table: &JunctionTable,
    params: &JoinParams,
) -> Vec<WallCorners> {
    (0..walls.len())
        .map(|i| miter_wall(walls, i, table, params.miter_limit))
        .collect()
}

/// Beveled corners for every wall, in input order.
#[must_use]
pub fn bevel_corners(walls: &[Wall], params: &JoinParams) -> Vec<WallCorners> {
    let table = detect_junctions(walls, params.junction_tolerance);
    (0..walls.len())
        .map(|i| bevel_wall(walls, i, &table, params.bevel_dot_threshold))
        .collect()
}
