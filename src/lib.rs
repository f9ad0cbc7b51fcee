//! # Parallel-Dot
//!
//! Benchmarks the dot product of two `f64` vectors under three reduction
//! strategies: a serial baseline, a task-based decomposition with eager or
//! deferred dispatch, and an explicit thread-per-chunk decomposition whose
//! results come back through channel completion handles.

pub mod config;
pub mod error;
pub mod plan;
pub mod reduce;
pub mod strategies;
pub mod utils;
pub mod vectors;

/// Re-export tui from utils for convenience
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{BenchConfig, DispatchMode};
    pub use crate::error::Error;
    pub use crate::strategies::{available_strategies, StrategyFn, StrategyInfo};
}
