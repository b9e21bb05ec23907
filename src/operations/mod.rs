pub mod corners;
pub mod floor;
pub mod junction;
pub mod simplify;
pub mod union;

pub use corners::{bevel_corners, miter_corners};
pub use floor::FloorPolygon;
pub use junction::{detect_junctions, Junction, JunctionMember, JunctionTable};
pub use simplify::{simplify, simplify_closed};
pub use union::WallUnion;

use crate::error::{OperationError, Result};
use crate::math::DEFAULT_JUNCTION_TOLERANCE;

/// Tunables shared by every wall-joining operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinParams {
    /// Distance below which two endpoints are treated as coincident.
    pub junction_tolerance: f64,
    /// Maximum miter excursion, as a multiple of wall thickness.
    pub miter_limit: f64,
    /// Bevels apply only when `|dot|` of the two wall directions is below this.
    pub bevel_dot_threshold: f64,
    /// Distance each floor vertex moves toward the room centroid.
    pub floor_inset: f64,
    /// Cross-product threshold for dropping collinear vertices.
    pub simplify_tolerance: f64,
}

impl Default for JoinParams {
    fn default() -> Self {
        Self {
            junction_tolerance: DEFAULT_JUNCTION_TOLERANCE,
            miter_limit: 3.0,
            bevel_dot_threshold: 0.3,
            floor_inset: 0.0,
            simplify_tolerance: 1e-6,
        }
    }
}

impl JoinParams {
    #[must_use]
    pub fn with_junction_tolerance(mut self, tolerance: f64) -> Self {
        self.junction_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    #[must_use]
    pub fn with_bevel_dot_threshold(mut self, threshold: f64) -> Self {
        self.bevel_dot_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_floor_inset(mut self, inset: f64) -> Self {
        self.floor_inset = inset;
        self
    }

    #[must_use]
    pub fn with_simplify_tolerance(mut self, tolerance: f64) -> Self {
        self.simplify_tolerance = tolerance;
        self
    }

    /// Checks that every tunable is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("junction_tolerance", self.junction_tolerance, false),
            ("miter_limit", self.miter_limit, false),
            ("bevel_dot_threshold", self.bevel_dot_threshold, false),
            ("floor_inset", self.floor_inset, true),
            ("simplify_tolerance", self.simplify_tolerance, true),
        ];
        for (name, value, zero_ok) in checks {
            let in_range = if zero_ok { value >= 0.0 } else { value > 0.0 };
            if !value.is_finite() || !in_range {
                return Err(OperationError::InvalidInput(format!("{name} = {value}")).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(JoinParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let params = JoinParams::default().with_junction_tolerance(0.0);
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("junction_tolerance"), "{err}");
    }

    #[test]
    fn rejects_nan_inset() {
        assert!(JoinParams::default().with_floor_inset(f64::NAN).validate().is_err());
    }

    #[test]
    fn zero_inset_is_allowed() {
        let params = JoinParams::default().with_floor_inset(0.0).with_miter_limit(2.0);
        assert!(params.validate().is_ok());
        assert!((params.miter_limit - 2.0).abs() < f64::EPSILON);
    }
}
