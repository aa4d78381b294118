//! Explorer configuration and parameter bounds.
//!
//! Holds the startup parameters for each fractal the explorer knows about and
//! the step sizes and limits used when the session nudges a parameter.

use crate::{GridSpec, IterationParams, DEFAULT_THRESHOLD};

/// Step sizes and limits for interactive parameter changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorerBounds {
    /// Amount added or removed per power change.
    pub power_step: f64,
    /// Lower bound applied when decreasing power. `None` leaves power unbounded.
    pub min_power: Option<f64>,
    pub resolution_step: u32,
    pub min_resolution: u32,
    pub max_resolution: u32,
    pub iteration_step: u32,
    /// Iterations have a floor but no ceiling.
    pub min_iterations: u32,
}

impl ExplorerBounds {
    pub fn power_up(&self, power: f64) -> f64 {
        power + self.power_step
    }

    pub fn power_down(&self, power: f64) -> f64 {
        let lowered = power - self.power_step;
        match self.min_power {
            Some(floor) => lowered.max(floor),
            None => lowered,
        }
    }

    pub fn resolution_up(&self, resolution: u32) -> u32 {
        resolution
            .saturating_add(self.resolution_step)
            .min(self.max_resolution)
    }

    pub fn resolution_down(&self, resolution: u32) -> u32 {
        resolution
            .saturating_sub(self.resolution_step)
            .max(self.min_resolution)
    }

    pub fn iterations_up(&self, max_iterations: u32) -> u32 {
        max_iterations.saturating_add(self.iteration_step)
    }

    pub fn iterations_down(&self, max_iterations: u32) -> u32 {
        max_iterations
            .saturating_sub(self.iteration_step)
            .max(self.min_iterations)
    }
}

/// Configuration for one explorable fractal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplorerConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    pub default_power: f64,
    /// Voxels per axis of the cubic sampling grid.
    pub default_resolution: u32,
    pub default_max_iterations: u32,
    /// Squared-radius escape bound passed to every computation.
    pub threshold: f64,
    pub bounds: ExplorerBounds,
}

impl ExplorerConfig {
    pub fn default_grid(&self) -> GridSpec {
        GridSpec::cubic(self.default_resolution)
    }

    pub fn default_params(&self) -> IterationParams {
        IterationParams::new(self.default_max_iterations, self.default_power)
            .with_threshold(self.threshold)
    }
}

/// Mandelbulb explorer configuration.
pub static MANDELBULB_CONFIG: ExplorerConfig = ExplorerConfig {
    id: "mandelbulb",
    display_name: "Mandelbulb",
    default_power: 8.0,
    default_resolution: 50,
    default_max_iterations: 20,
    threshold: DEFAULT_THRESHOLD,
    bounds: ExplorerBounds {
        power_step: 0.5,
        min_power: None,
        resolution_step: 5,
        min_resolution: 20,
        max_resolution: 80,
        iteration_step: 5,
        min_iterations: 5,
    },
};

/// Look up an explorer configuration by ID.
pub fn get_explorer_config(id: &str) -> Option<&'static ExplorerConfig> {
    match id {
        "mandelbulb" => Some(&MANDELBULB_CONFIG),
        _ => None,
    }
}
