use thiserror::Error;

/// Top-level error type for the wall geometry engine.
#[derive(Debug, Error)]
pub enum WallplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised when a caller references walls the plan does not hold.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("duplicate wall id: {0}")]
    DuplicateId(String),
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`WallplanError`].
pub type Result<T> = std::result::Result<T, WallplanError>;
