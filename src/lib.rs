pub mod error;
pub mod math;
pub mod operations;
pub mod plan;

pub use error::{Result, WallplanError};
pub use operations::JoinParams;
pub use plan::{Edge, Polygon, Wall, WallCorners, WallPlan};
