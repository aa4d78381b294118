//! Compute error types.

use bulbwonder_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
