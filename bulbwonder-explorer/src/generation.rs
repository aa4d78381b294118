use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Id of one recompute request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Shared counter of recompute requests.
///
/// The kernel is never interrupted. Instead each request takes a new
/// generation, and a finished result is only used if no newer request was
/// made while it ran.
#[derive(Clone, Debug, Default)]
pub struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, making every earlier one stale.
    pub fn advance(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::Acquire))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let counter = GenerationCounter::new();
        assert_eq!(counter.current().id(), 0);

        let first = counter.advance();
        let second = counter.advance();
        assert!(second > first);
        assert_eq!(counter.current(), second);
    }

    #[test]
    fn test_advance_makes_previous_stale() {
        let counter = GenerationCounter::new();
        let first = counter.advance();
        assert!(counter.is_current(first));

        counter.advance();
        assert!(!counter.is_current(first));
    }

    #[test]
    fn test_clones_share_state() {
        let counter1 = GenerationCounter::new();
        let counter2 = counter1.clone();

        let generation = counter1.advance();
        assert!(counter2.is_current(generation));

        counter2.advance();
        assert!(!counter1.is_current(generation));
    }
}
