use crate::math::cross;
use crate::operations::junction::JunctionTable;
use crate::plan::{Wall, WallCorners};

/// Computes approximate corners of `walls[index]` for near-perpendicular
/// junctions.
///
/// When the partner wall's direction is within `dot_threshold` of
/// perpendicular (`|dot| < dot_threshold`), the corner on the left of this
/// wall's outward direction moves to the junction point offset by half the
/// thickness along that outward direction. The wall whose partner lies to
/// its left retreats into itself; the other extends past the junction.
/// Both choices depend only on the outward directions, so two walls at a
/// junction always produce opposite seam edges whatever their drawing
/// direction. All other corners stay unmitered.
#[must_use]
pub fn bevel_wall(
    walls: &[Wall],
    index: usize,
    table: &JunctionTable,
    dot_threshold: f64,
) -> WallCorners {
    let wall = &walls[index];
    let mut corners = wall.base_corners();
    if wall.direction().is_none() {
        return corners;
    }

    for is_start in [true, false] {
        let Some(junction) = table.at(index, is_start) else {
            continue;
        };
        let (Some(me), Some(partner)) =
            (junction.member(index, is_start), junction.partner_of(index))
        else {
            continue;
        };
        if walls[partner.wall].direction().is_none() {
            continue;
        }
        if me.outward.dot(&partner.outward).abs() >= dot_threshold {
            continue;
        }

        let step = me.outward * wall.half_thickness();
        let bevel = if cross(&me.outward, &partner.outward) > 0.0 {
            junction.point + step
        } else {
            junction.point - step
        };
        // Left of the outward direction: corner1 at the start, corner3 at the end.
        if is_start {
            corners.corner1 = bevel;
        } else {
            corners.corner3 = bevel;
        }
    }

    corners
}
