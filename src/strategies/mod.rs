//! Reduction strategies.
//!
//! Three interchangeable ways of computing the same dot product: a serial
//! baseline, a task-based decomposition, and an explicit thread-per-chunk
//! decomposition. Every parallel strategy combines its partial results in
//! ascending chunk order regardless of completion order, so the final
//! bit pattern is reproducible for identical inputs and configuration.

pub mod serial;
pub mod task_based;
pub mod thread_packed;

pub use serial::dot_serial;
pub use task_based::dot_task_based;
pub use thread_packed::dot_thread_packed;

use std::time::Duration;

use crate::config::BenchConfig;
use crate::error::Error;
use crate::vectors::seeded_pair;

/// Signature shared by every reduction strategy: the computed scalar plus
/// the wall-clock time from just before dispatch to just after the final
/// combination.
pub type StrategyFn = fn(&BenchConfig, &[f64], &[f64]) -> Result<(f64, Duration), Error>;

/// Descriptor for one strategy.
pub struct StrategyInfo {
    /// Unique identifier for this strategy (e.g., "serial", "task_based")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The strategy implementation
    pub function: StrategyFn,
}

/// All strategies, in the order they are benchmarked.
///
/// The serial baseline comes first; it is the correctness oracle the
/// parallel strategies are checked against.
pub fn available_strategies() -> Vec<StrategyInfo> {
    vec![
        StrategyInfo {
            name: "serial",
            description: "Full-range reduction on the calling thread",
            function: dot_serial,
        },
        StrategyInfo {
            name: "task_based",
            description: "One asynchronous handle per chunk, eager or deferred dispatch",
            function: dot_task_based,
        },
        StrategyInfo {
            name: "thread_packed",
            description: "One thread per chunk, results through channel completion handles",
            function: dot_thread_packed,
        },
    ]
}

/// Verify that every strategy matches the serial reference on a seeded
/// vector pair, within a small relative tolerance for summation-order
/// differences.
pub fn verify(cfg: &BenchConfig) -> Result<(), String> {
    // One element past a multiple of the worker count, so the remainder
    // path is exercised whatever the configuration.
    let n = cfg.worker_count * 333 + 1;
    let (a, b) = seeded_pair(n, 4);

    let (expected, _) = dot_serial(cfg, &a, &b).map_err(|e| e.to_string())?;
    let tolerance = 1e-9 * expected.abs().max(1.0);

    for strategy in available_strategies() {
        let (result, _) = (strategy.function)(cfg, &a, &b)
            .map_err(|e| format!("Strategy '{}' failed: {}", strategy.name, e))?;
        let diff = (result - expected).abs();

        if diff > tolerance {
            return Err(format!(
                "Strategy '{}' failed verification. Expected {}, got {}, diff {}",
                strategy.name, expected, result, diff
            ));
        }
    }

    Ok(())
}
