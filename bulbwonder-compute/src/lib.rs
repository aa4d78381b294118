//! Escape-time computation of the Mandelbulb voxel field.
//!
//! [`FieldComputer`] is the entry point. Per-voxel work sits behind
//! [`VoxelPointComputer`] and [`FieldRenderer`] spreads it over a rayon pool.

pub mod error;
pub mod field_computer;
pub mod field_renderer;
pub mod mandelbulb;
pub mod point_compute;

pub use error::ComputeError;
pub use field_computer::FieldComputer;
pub use field_renderer::FieldRenderer;
pub use mandelbulb::{escape_iterations, MandelbulbComputer};
pub use point_compute::VoxelPointComputer;

// Re-export core types for convenience
pub use bulbwonder_core::*;
