//! Error types for surface generation.

use thiserror::Error;

/// Errors that can occur while building a surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The grid is too small to form a single edge.
    #[error("invalid input: grid size must be at least 2, got {grid_size}")]
    InvalidInput { grid_size: usize },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, SurfaceError>`.
pub type Result<T> = std::result::Result<T, SurfaceError>;
