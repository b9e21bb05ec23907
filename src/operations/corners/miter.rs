use tracing::trace;

use crate::math::distance_2d::{clamp_toward, distance};
use crate::math::intersect_2d::line_intersection;
use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Vector2};
use crate::operations::junction::{JunctionMember, JunctionTable};
use crate::plan::{Wall, WallCorners};

/// Side of a wall relative to its outward direction at a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Computes the corners of `walls[index]` mitered against one partner wall at
/// each of its junctions.
///
/// Each corner at a junction is replaced by the intersection of this wall's
/// thickness-edge line with the facing edge line of the first other member.
/// Corners stay unmitered when there is no partner or the lines are parallel.
/// A miter point further than `miter_limit × thickness` from its unmitered
/// corner is pulled back to exactly that distance.
#[must_use]
pub fn miter_wall(
    walls: &[Wall],
    index: usize,
    table: &JunctionTable,
    miter_limit: f64,
) -> WallCorners {
    let wall = &walls[index];
    let mut corners = wall.base_corners();
    let limit = miter_limit * wall.thickness;

    for is_start in [true, false] {
        let Some(junction) = table.at(index, is_start) else {
            continue;
        };
        debug_assert!(junction.members.len() >= 2);
        let (Some(me), Some(partner)) =
            (junction.member(index, is_start), junction.partner_of(index))
        else {
            continue;
        };
        let other = &walls[partner.wall];

        // Relative to the outward direction, the start-end left corner is
        // corner1 and the end-end left corner is corner3.
        let (left_slot, right_slot) = if is_start {
            (&mut corners.corner1, &mut corners.corner2)
        } else {
            (&mut corners.corner3, &mut corners.corner4)
        };

        for (side, slot) in [(Side::Left, left_slot), (Side::Right, right_slot)] {
            let (a0, a1) = edge_line(wall, me, side);
            let (b0, b1) = edge_line(other, partner, side.opposite());
            let Some(miter) = line_intersection(&a0, &a1, &b0, &b1) else {
                continue;
            };
            let base = *slot;
            if distance(&base, &miter) > limit {
                trace!(wall = %wall.id, limit, "clamping miter spike");
                *slot = clamp_toward(&base, &miter, limit);
            } else {
                *slot = miter;
            }
        }
    }

    corners
}

/// The thickness-edge line on `side` of `wall`, as seen looking outward from
/// the junction `member` belongs to.
fn edge_line(wall: &Wall, member: &JunctionMember, side: Side) -> (Point2, Point2) {
    let normal: Vector2 = left_normal(&member.outward) * wall.half_thickness();
    let offset = match side {
        Side::Left => normal,
        Side::Right => -normal,
    };
    (wall.start + offset, wall.end + offset)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::junction::detect_junctions;
    use approx::assert_abs_diff_eq;

    fn wall(id: &str, a: (f64, f64), b: (f64, f64), t: f64) -> Wall {
        Wall::new(id, Point2::new(a.0, a.1), Point2::new(b.0, b.1), t, 240.0)
    }

    fn assert_point(p: Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
    }

    #[test]
    fn isolated_wall_keeps_base_rectangle() {
        let walls = vec![wall("a", (0.0, 0.0), (100.0, 0.0), 20.0)];
        let table = detect_junctions(&walls, 1.0);
        let corners = miter_wall(&walls, 0, &table, 3.0);
        assert_eq!(corners, walls[0].base_corners());
    }

    #[test]
    fn right_angle_miter_is_bounded() {
        let t = 20.0;
        let walls = vec![
            wall("a", (0.0, 0.0), (100.0, 0.0), t),
            wall("b", (100.0, 0.0), (100.0, 100.0), t),
        ];
        let table = detect_junctions(&walls, 1.0);
        let a = miter_wall(&walls, 0, &table, 3.0);
        let base = walls[0].base_corners();

        // Inner corner (left of travel) and outer corner (right of travel).
        assert_point(a.corner4, 90.0, 10.0);
        assert_point(a.corner3, 110.0, -10.0);
        for (mitered, original) in [(a.corner3, base.corner3), (a.corner4, base.corner4)] {
            let d = distance(&mitered, &original);
            assert!(d > 0.0 && d <= 3.0 * t, "excursion {d}");
        }
        // Start end has no junction.
        assert_eq!(a.corner1, base.corner1);
        assert_eq!(a.corner2, base.corner2);
    }

    #[test]
    fn adjoining_walls_share_miter_points() {
        let walls = vec![
            wall("a", (0.0, 0.0), (100.0, 0.0), 20.0),
            wall("b", (100.0, 0.0), (100.0, 100.0), 20.0),
        ];
        let table = detect_junctions(&walls, 1.0);
        let a = miter_wall(&walls, 0, &table, 3.0);
        let b = miter_wall(&walls, 1, &table, 3.0);
        assert_point(b.corner1, a.corner4.x, a.corner4.y);
        assert_point(b.corner2, a.corner3.x, a.corner3.y);
    }

    #[test]
    fn acute_junction_is_clamped() {
        let t = 20.0;
        let angle = 10.0_f64.to_radians();
        let walls = vec![
            wall("a", (0.0, 0.0), (200.0, 0.0), t),
            wall("b", (0.0, 0.0), (200.0 * angle.cos(), 200.0 * angle.sin()), t),
        ];
        let table = detect_junctions(&walls, 1.0);
        let a = miter_wall(&walls, 0, &table, 3.0);
        let base = walls[0].base_corners();
        let d = distance(&a.corner1, &base.corner1);
        assert_abs_diff_eq!(d, 3.0 * t, epsilon = 1e-9);
        // Clamp moves along the edge line toward the raw miter point.
        assert_abs_diff_eq!(a.corner1.y, 10.0, epsilon = 1e-9);
        assert!(a.corner1.x > 0.0);
    }

    #[test]
    fn collinear_walls_keep_unmitered_corners() {
        let walls = vec![
            wall("a", (0.0, 0.0), (100.0, 0.0), 20.0),
            wall("b", (100.0, 0.0), (200.0, 0.0), 20.0),
        ];
        let table = detect_junctions(&walls, 1.0);
        let a = miter_wall(&walls, 0, &table, 3.0);
        assert_eq!(a, walls[0].base_corners());
    }
}
