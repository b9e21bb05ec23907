use crate::math::distance_2d::distance;
use crate::math::polygon_2d::{area, left_normal, perimeter, segment_direction, signed_area};
use crate::math::{Point2, Vector2};

/// A thick line segment in a floor plan.
///
/// `height` is carried for downstream consumers and plays no part in the
/// 2D geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub id: String,
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub height: f64,
}

impl Wall {
    /// Creates a new wall.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        start: Point2,
        end: Point2,
        thickness: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            thickness,
            height,
        }
    }

    /// Centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }

    #[must_use]
    pub fn half_thickness(&self) -> f64 {
        self.thickness * 0.5
    }

    /// Unit direction from start to end, or `None` for a zero-length wall.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        segment_direction(&self.start, &self.end).ok()
    }

    /// The start point when `is_start`, otherwise the end point.
    #[must_use]
    pub fn endpoint(&self, is_start: bool) -> Point2 {
        if is_start {
            self.start
        } else {
            self.end
        }
    }

    /// The four unmitered thickness corners.
    ///
    /// A zero-length wall has no direction and collapses to its start point.
    #[must_use]
    pub fn base_corners(&self) -> WallCorners {
        let offset = self
            .direction()
            .map_or_else(Vector2::zeros, |dir| left_normal(&dir) * self.half_thickness());
        WallCorners {
            wall_id: self.id.clone(),
            corner1: self.start + offset,
            corner2: self.start - offset,
            corner3: self.end - offset,
            corner4: self.end + offset,
            centerline: (self.start, self.end),
        }
    }
}

/// The four thickness corners of a wall, counter-clockwise.
///
/// `corner1`/`corner2` sit at the start end (left/right of the direction of
/// travel), `corner3`/`corner4` at the end (right/left).
#[derive(Debug, Clone, PartialEq)]
pub struct WallCorners {
    pub wall_id: String,
    pub corner1: Point2,
    pub corner2: Point2,
    pub corner3: Point2,
    pub corner4: Point2,
    pub centerline: (Point2, Point2),
}

impl WallCorners {
    #[must_use]
    pub fn as_array(&self) -> [Point2; 4] {
        [self.corner1, self.corner2, self.corner3, self.corner4]
    }

    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.as_array().to_vec())
    }

    /// The left thickness edge (`corner1`→`corner4`).
    #[must_use]
    pub fn left_edge(&self) -> (Point2, Point2) {
        (self.corner1, self.corner4)
    }

    /// The right thickness edge (`corner2`→`corner3`).
    #[must_use]
    pub fn right_edge(&self) -> (Point2, Point2) {
        (self.corner2, self.corner3)
    }

    /// The four directed boundary edges, consecutive corners with wrap-around.
    #[must_use]
    pub fn edges(&self) -> [Edge; 4] {
        let c = self.as_array();
        std::array::from_fn(|i| Edge {
            start: c[i],
            end: c[(i + 1) % 4],
            owner_wall_id: self.wall_id.clone(),
        })
    }
}

/// A directed boundary segment of a wall's corner quadrilateral.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
    pub owner_wall_id: String,
}

impl Edge {
    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            owner_wall_id: self.owner_wall_id.clone(),
        }
    }
}

/// An implicitly closed sequence of points.
///
/// Winding direction is not normalized; see [`Polygon::ensure_ccw`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        area(&self.points)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points)
    }

    /// Returns a copy with collinear vertices removed, wrap-around included.
    #[must_use]
    pub fn simplified(&self, tolerance: f64) -> Self {
        Self::new(crate::operations::simplify_closed(&self.points, tolerance))
    }

    /// Returns a copy wound counter-clockwise.
    #[must_use]
    pub fn ensure_ccw(&self) -> Self {
        Self::new(crate::math::polygon_2d::ensure_ccw(&self.points))
    }
}
