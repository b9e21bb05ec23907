pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for floating-point comparisons on unit-scale values.
pub const TOLERANCE: f64 = 1e-10;

/// Determinant magnitude below which two lines are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// Default distance below which two wall endpoints are treated as coincident.
pub const DEFAULT_JUNCTION_TOLERANCE: f64 = 1.0;

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
