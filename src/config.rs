//! Run configuration for the benchmark.
//!
//! The original design kept the worker count and dispatch policy as
//! process-wide globals; here both live in an immutable [`BenchConfig`]
//! handed to every strategy invocation.

/// Default degree of decomposition. A configuration constant, not derived
/// from the host's hardware concurrency.
pub const DEFAULT_WORKER_COUNT: usize = 3;

/// How the task-based strategy dispatches its per-chunk work.
///
/// A pure scheduling choice: it decides whether chunks run in parallel or
/// are effectively serialized, never what the result is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// Spawn a worker at dispatch time; all chunks run concurrently.
    #[default]
    Eager,
    /// Hold the chunk's work until its handle is first waited on.
    Deferred,
}

/// Immutable configuration for one benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BenchConfig {
    /// Number of chunks (and workers) per strategy invocation.
    pub worker_count: usize,
    /// Dispatch policy for the task-based strategy; the thread-packed
    /// strategy is always eager and ignores this.
    pub dispatch: DispatchMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            dispatch: DispatchMode::default(),
        }
    }
}

impl BenchConfig {
    /// Default worker count with an explicit dispatch mode.
    pub fn with_dispatch(dispatch: DispatchMode) -> Self {
        Self {
            dispatch,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = BenchConfig::default();
        assert_eq!(cfg.worker_count, 3);
        assert_eq!(cfg.dispatch, DispatchMode::Eager);
    }

    #[test]
    fn test_with_dispatch_keeps_worker_count() {
        let cfg = BenchConfig::with_dispatch(DispatchMode::Deferred);
        assert_eq!(cfg.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(cfg.dispatch, DispatchMode::Deferred);
    }
}
