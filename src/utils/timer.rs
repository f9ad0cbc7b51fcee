//! Wall-clock timing around a single strategy invocation.
//!
//! Single-run measurement only: the elapsed time covers dispatch through
//! final combination of one invocation, with no warmup or cross-run
//! aggregation.

use std::time::{Duration, Instant};

/// Run `f` once and return its value with the elapsed wall-clock time.
pub fn time<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Format a duration as milliseconds for display.
pub fn format_millis(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1e3)
}
