//! Whole-grid Mandelbulb computation.
//!
//! [`FieldComputer`] validates the request, then runs a [`FieldRenderer`]
//! over a [`MandelbulbComputer`] on the chosen executor. Validation failures
//! are reported before any voxel is touched.

use std::time::Instant;

use crate::{ComputeError, FieldRenderer, MandelbulbComputer};
use bulbwonder_core::{ConfigError, GridSpec, IterationParams, VoxelField};

enum Executor {
    /// rayon's global pool
    Global,
    Dedicated(rayon::ThreadPool),
    Sequential,
}

pub struct FieldComputer {
    executor: Executor,
}

impl FieldComputer {
    /// Parallel computer on rayon's global pool.
    pub fn new() -> Self {
        Self {
            executor: Executor::Global,
        }
    }

    /// Single-threaded computer. Produces the same field as the parallel ones.
    pub fn sequential() -> Self {
        Self {
            executor: Executor::Sequential,
        }
    }

    /// Parallel computer with its own pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, ComputeError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("bulbwonder-worker-{index}"))
            .build()?;
        Ok(Self {
            executor: Executor::Dedicated(pool),
        })
    }

    /// Number of workers a computation is split across.
    pub fn thread_count(&self) -> usize {
        match &self.executor {
            Executor::Global => rayon::current_num_threads(),
            Executor::Dedicated(pool) => pool.current_num_threads(),
            Executor::Sequential => 1,
        }
    }

    /// Compute the escape iteration field for `grid`.
    ///
    /// Deterministic: identical inputs give identical fields regardless of
    /// executor or thread count.
    pub fn compute(
        &self,
        grid: GridSpec,
        params: IterationParams,
    ) -> Result<VoxelField, ConfigError> {
        grid.validate()?;
        params.validate()?;

        log::debug!(
            "Computing {}x{}x{} field (power={}, max_iterations={}, threshold={}) on {} thread(s)",
            grid.width,
            grid.height,
            grid.depth,
            params.power,
            params.max_iterations,
            params.threshold,
            self.thread_count()
        );

        let start = Instant::now();
        let renderer = FieldRenderer::new(MandelbulbComputer::new(params));
        let field = match &self.executor {
            Executor::Global => renderer.render(grid),
            Executor::Dedicated(pool) => pool.install(|| renderer.render(grid)),
            Executor::Sequential => renderer.render_sequential(grid),
        };

        log::info!(
            "Computed {}x{}x{} field in {:.2?}: {} of {} voxels escaped",
            grid.width,
            grid.height,
            grid.depth,
            start.elapsed(),
            field.escaped_count(),
            field.len()
        );

        Ok(field)
    }
}

impl Default for FieldComputer {
    fn default() -> Self {
        Self::new()
    }
}
