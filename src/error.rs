use thiserror::Error;

/// Top-level error type for the Storey floor-plan kernel.
#[derive(Debug, Error)]
pub enum StoreyError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while editing or querying a layer's plan graph.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`StoreyError`].
pub type Result<T> = std::result::Result<T, StoreyError>;
