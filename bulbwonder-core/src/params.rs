use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Escape bound used when the caller does not pick one.
///
/// Compared against the running x² + y² + z², not against the radius.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Recurrence parameters for one field computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationParams {
    /// Iteration cap. Voxels still bounded after this many steps record 0.
    pub max_iterations: u32,
    /// Mandelbulb exponent. Not validated: values below 1 are allowed and
    /// behave however the arithmetic makes them behave.
    pub power: f64,
    /// Squared-radius escape bound.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl IterationParams {
    pub fn new(max_iterations: u32, power: f64) -> Self {
        Self {
            max_iterations,
            power,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        // NaN fails `> 0.0` as well
        if !(self.threshold > 0.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

impl Default for IterationParams {
    fn default() -> Self {
        Self::new(20, 8.0)
    }
}
