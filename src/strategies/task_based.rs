//! Task-based strategy: one asynchronous handle per chunk.
//!
//! Dispatch follows the configured [`DispatchMode`]: `Eager` spawns a
//! scoped thread per chunk at dispatch time, `Deferred` holds the chunk's
//! work and runs it when its handle is first waited on, which serializes
//! the computation onto the calling thread. Handles are always waited on
//! in ascending chunk order, so the summation order does not depend on
//! dispatch mode or thread completion order.

use std::thread;
use std::time::Duration;

use crate::config::{BenchConfig, DispatchMode};
use crate::error::Error;
use crate::plan::plan_chunks;
use crate::reduce::partial_dot;
use crate::utils::timer::time;

/// Handle to one chunk's outstanding work.
enum TaskHandle<'scope, 'env> {
    Eager(thread::ScopedJoinHandle<'scope, f64>),
    Deferred(Box<dyn FnOnce() -> f64 + Send + 'env>),
}

impl TaskHandle<'_, '_> {
    /// Block until the partial result is available. For a deferred handle
    /// this is where the work actually runs.
    fn wait(self) -> Result<f64, Error> {
        match self {
            TaskHandle::Eager(handle) => handle.join().map_err(|_| Error::WorkerFailure {
                strategy: "task_based",
            }),
            TaskHandle::Deferred(work) => Ok(work()),
        }
    }
}

/// Compute the dot product with one task per chunk.
///
/// Elapsed time is measured from just before dispatch to just after the
/// final combination. Fails with [`Error::InvalidLength`] before any
/// dispatch when the vectors cannot be split into `cfg.worker_count`
/// non-empty chunks, and with [`Error::WorkerFailure`] if any worker
/// panics instead of producing its partial result.
pub fn dot_task_based(cfg: &BenchConfig, a: &[f64], b: &[f64]) -> Result<(f64, Duration), Error> {
    let chunks = plan_chunks(a.len(), cfg.worker_count)?;

    let (result, elapsed) = time(|| -> Result<f64, Error> {
        thread::scope(|s| {
            let handles: Vec<TaskHandle<'_, '_>> = chunks
                .iter()
                .map(|&chunk| match cfg.dispatch {
                    DispatchMode::Eager => {
                        TaskHandle::Eager(s.spawn(move || partial_dot(a, b, chunk)))
                    }
                    DispatchMode::Deferred => {
                        TaskHandle::Deferred(Box::new(move || partial_dot(a, b, chunk)))
                    }
                })
                .collect();

            // Wait on every handle before surfacing a failure, so the scope
            // never re-raises a panicked worker we have not joined.
            let partials: Vec<Result<f64, Error>> =
                handles.into_iter().map(TaskHandle::wait).collect();

            // Combine in ascending chunk order.
            let mut total = 0.0;
            for partial in partials {
                total += partial?;
            }
            Ok(total)
        })
    });

    Ok((result?, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_length() {
        // n = 10, 3 workers: chunks [0,3) [3,6) [6,10)
        let a: Vec<f64> = (1..=10).map(f64::from).collect();
        let b = vec![1.0; 10];
        let (result, _) = dot_task_based(&BenchConfig::default(), &a, &b).unwrap();
        assert!((result - 55.0).abs() < 1e-12);
    }

    #[test]
    fn test_deferred_dispatch() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let cfg = BenchConfig::with_dispatch(DispatchMode::Deferred);
        let (result, _) = dot_task_based(&cfg, &a, &b).unwrap();
        assert!((result - 56.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_length() {
        let a = [1.0, 2.0];
        let b = [3.0, 4.0];
        assert_eq!(
            dot_task_based(&BenchConfig::default(), &a, &b),
            Err(Error::InvalidLength { len: 2, workers: 3 })
        );
    }
}
