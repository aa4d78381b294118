use std::fmt;

use bulbwonder_core::{
    ExplorerBounds, ExplorerConfig, GridSpec, IterationParams, MANDELBULB_CONFIG,
};
use serde::{Deserialize, Serialize};

use crate::SessionError;

/// Parameters the explorer lets the user change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub power: f64,
    /// Voxels per axis of the cubic grid.
    pub resolution: u32,
    pub max_iterations: u32,
}

impl SessionConfig {
    pub fn from_explorer(explorer: &ExplorerConfig) -> Self {
        Self {
            power: explorer.default_power,
            resolution: explorer.default_resolution,
            max_iterations: explorer.default_max_iterations,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_explorer(&MANDELBULB_CONFIG)
    }
}

/// A single parameter nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamDelta {
    IncreasePower,
    DecreasePower,
    IncreaseResolution,
    DecreaseResolution,
    IncreaseIterations,
    DecreaseIterations,
}

impl ParamDelta {
    pub const ALL: [ParamDelta; 6] = [
        ParamDelta::IncreasePower,
        ParamDelta::DecreasePower,
        ParamDelta::IncreaseResolution,
        ParamDelta::DecreaseResolution,
        ParamDelta::IncreaseIterations,
        ParamDelta::DecreaseIterations,
    ];

    /// Default key binding: arrows for power, `+`/`-` for resolution,
    /// `]`/`[` for iterations.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "up" => Some(ParamDelta::IncreasePower),
            "down" => Some(ParamDelta::DecreasePower),
            "+" => Some(ParamDelta::IncreaseResolution),
            "-" => Some(ParamDelta::DecreaseResolution),
            "]" => Some(ParamDelta::IncreaseIterations),
            "[" => Some(ParamDelta::DecreaseIterations),
            _ => None,
        }
    }
}

impl fmt::Display for ParamDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamDelta::IncreasePower => "increase power",
            ParamDelta::DecreasePower => "decrease power",
            ParamDelta::IncreaseResolution => "increase resolution",
            ParamDelta::DecreaseResolution => "decrease resolution",
            ParamDelta::IncreaseIterations => "increase iterations",
            ParamDelta::DecreaseIterations => "decrease iterations",
        };
        f.write_str(name)
    }
}

/// Immutable exploration state. Transitions produce a new `Session`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    explorer: &'static ExplorerConfig,
    config: SessionConfig,
}

impl Session {
    /// Session at the explorer's startup parameters.
    pub fn new(explorer: &'static ExplorerConfig) -> Self {
        Self {
            explorer,
            config: SessionConfig::from_explorer(explorer),
        }
    }

    /// Session at explicit parameters.
    ///
    /// Rejected if the parameters cannot be computed or lie outside the
    /// explorer's bounds.
    pub fn with_config(
        explorer: &'static ExplorerConfig,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let session = Self { explorer, config };
        let (grid, params) = session.field_request();
        grid.validate()?;
        params.validate()?;
        check_bounds(&explorer.bounds, &config)?;
        Ok(session)
    }

    pub fn explorer(&self) -> &'static ExplorerConfig {
        self.explorer
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Grid and parameters for the next computation.
    pub fn field_request(&self) -> (GridSpec, IterationParams) {
        let grid = GridSpec::cubic(self.config.resolution);
        let params = IterationParams::new(self.config.max_iterations, self.config.power)
            .with_threshold(self.explorer.threshold);
        (grid, params)
    }

    /// Apply one nudge, clamped to the explorer's bounds.
    ///
    /// A nudge that changes nothing (already at a bound) is rejected so the
    /// caller can skip the recomputation.
    pub fn apply(&self, delta: ParamDelta) -> Result<Session, SessionError> {
        let bounds = &self.explorer.bounds;
        let mut next = self.config;

        match delta {
            ParamDelta::IncreasePower => next.power = bounds.power_up(next.power),
            ParamDelta::DecreasePower => next.power = bounds.power_down(next.power),
            ParamDelta::IncreaseResolution => {
                next.resolution = bounds.resolution_up(next.resolution)
            }
            ParamDelta::DecreaseResolution => {
                next.resolution = bounds.resolution_down(next.resolution)
            }
            ParamDelta::IncreaseIterations => {
                next.max_iterations = bounds.iterations_up(next.max_iterations)
            }
            ParamDelta::DecreaseIterations => {
                next.max_iterations = bounds.iterations_down(next.max_iterations)
            }
        }

        if next == self.config {
            return Err(SessionError::AtBound(delta));
        }

        let session = Session::with_config(self.explorer, next)?;
        log::debug!("{delta}: {:?} -> {:?}", self.config, session.config);
        Ok(session)
    }
}

fn check_bounds(bounds: &ExplorerBounds, config: &SessionConfig) -> Result<(), SessionError> {
    if let Some(floor) = bounds.min_power {
        if config.power < floor {
            return Err(SessionError::OutOfBounds {
                parameter: "power",
                value: config.power,
            });
        }
    }
    if !(bounds.min_resolution..=bounds.max_resolution).contains(&config.resolution) {
        return Err(SessionError::OutOfBounds {
            parameter: "resolution",
            value: config.resolution.into(),
        });
    }
    if config.max_iterations < bounds.min_iterations {
        return Err(SessionError::OutOfBounds {
            parameter: "max_iterations",
            value: config.max_iterations.into(),
        });
    }
    Ok(())
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&MANDELBULB_CONFIG)
    }
}
