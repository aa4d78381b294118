use std::sync::Arc;
use std::thread::{self, JoinHandle};

use bulbwonder_compute::FieldComputer;
use bulbwonder_core::{ConfigError, VoxelField};

use crate::{Generation, GenerationCounter, ParamDelta, Session, SessionConfig, SessionError};

/// Consumer of computed fields, typically a point-cloud renderer.
pub trait FieldSink {
    fn present(&mut self, config: &SessionConfig, field: &VoxelField);
}

/// Field computation running on a background thread.
pub struct PendingField {
    generation: Generation,
    config: SessionConfig,
    handle: JoinHandle<Result<VoxelField, ConfigError>>,
}

impl PendingField {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Drives recomputation for a [`Session`] and hands results to a sink.
pub struct ExplorationSession<S: FieldSink> {
    session: Session,
    computer: Arc<FieldComputer>,
    generations: GenerationCounter,
    sink: S,
}

impl<S: FieldSink> ExplorationSession<S> {
    pub fn new(session: Session, computer: FieldComputer, sink: S) -> Self {
        Self {
            session,
            computer: Arc::new(computer),
            generations: GenerationCounter::new(),
            sink,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Compute the field for the current parameters and present it.
    pub fn recompute(&mut self) -> Result<(), ConfigError> {
        let generation = self.generations.advance();
        let (grid, params) = self.session.field_request();
        let field = self.computer.compute(grid, params)?;

        log::debug!("Presenting generation {}", generation.id());
        self.sink.present(self.session.config(), &field);
        Ok(())
    }

    /// Apply a nudge and, if accepted, recompute synchronously.
    ///
    /// A rejected nudge leaves the session and sink untouched.
    pub fn handle(&mut self, delta: ParamDelta) -> Result<(), SessionError> {
        self.session = self.session.apply(delta)?;
        self.recompute()?;
        Ok(())
    }

    /// Apply a nudge and start the recomputation on a background thread.
    pub fn handle_in_background(&mut self, delta: ParamDelta) -> Result<PendingField, SessionError> {
        self.session = self.session.apply(delta)?;
        Ok(self.recompute_in_background())
    }

    /// Start computing the current parameters on a background thread.
    ///
    /// Any computation started earlier becomes stale and will be dropped by
    /// [`ExplorationSession::accept`].
    pub fn recompute_in_background(&mut self) -> PendingField {
        let generation = self.generations.advance();
        let (grid, params) = self.session.field_request();
        let computer = Arc::clone(&self.computer);

        log::debug!("Starting background generation {}", generation.id());
        let handle = thread::spawn(move || computer.compute(grid, params));

        PendingField {
            generation,
            config: *self.session.config(),
            handle,
        }
    }

    /// Wait for a background computation and present it if still current.
    ///
    /// Returns `Ok(false)` when the result was stale and discarded.
    pub fn accept(&mut self, pending: PendingField) -> Result<bool, SessionError> {
        let PendingField {
            generation,
            config,
            handle,
        } = pending;
        let field = handle.join().map_err(|_| SessionError::WorkerPanicked)??;

        if !self.generations.is_current(generation) {
            log::debug!(
                "Discarding stale generation {} (current: {})",
                generation.id(),
                self.generations.current().id()
            );
            return Ok(false);
        }

        self.sink.present(&config, &field);
        Ok(true)
    }
}
