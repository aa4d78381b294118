//! Error types shared by the compute and explorer crates.

use thiserror::Error;

use crate::grid::Axis;

/// Parameters rejected before any voxel is computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("computation refused due to invalid parameters: {axis} must be positive")]
    ZeroDimension { axis: Axis },

    #[error("computation refused due to invalid parameters: max_iterations must be positive")]
    ZeroIterations,

    #[error("computation refused due to invalid parameters: threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("computation refused due to invalid parameters: grid {shape:?} is too large to allocate")]
    TooLarge { shape: (u32, u32, u32) },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field has {actual} values but grid {shape:?} needs {expected}")]
    ShapeMismatch {
        shape: (u32, u32, u32),
        expected: usize,
        actual: usize,
    },
}
