//! Data model for the Mandelbulb voxel field.
//!
//! Grid geometry, iteration parameters, the computed [`VoxelField`] and the
//! explorer's startup configuration. Nothing here computes a field.

pub mod config;
pub mod error;
pub mod grid;
pub mod params;
pub mod points;
pub mod voxel_field;

pub use config::{get_explorer_config, ExplorerBounds, ExplorerConfig, MANDELBULB_CONFIG};
pub use error::{ConfigError, FieldError};
pub use grid::{Axis, GridSpec};
pub use params::{IterationParams, DEFAULT_THRESHOLD};
pub use points::Point3;
pub use voxel_field::VoxelField;
