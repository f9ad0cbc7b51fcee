//! Serial baseline strategy.

use std::time::Duration;

use crate::config::BenchConfig;
use crate::error::Error;
use crate::plan::Chunk;
use crate::reduce::partial_dot;
use crate::utils::timer::time;

/// Compute the dot product over the full range `[0, n)` on the calling
/// thread. No decomposition, no concurrency; every parallel strategy must
/// match this result up to floating-point summation-order differences.
pub fn dot_serial(_cfg: &BenchConfig, a: &[f64], b: &[f64]) -> Result<(f64, Duration), Error> {
    let full = Chunk {
        start: 0,
        end: a.len(),
    };
    let (value, elapsed) = time(|| partial_dot(a, b, full));
    Ok((value, elapsed))
}
