//! Error taxonomy for strategy invocations.
//!
//! Failures are local to one invocation: the shared input vectors are
//! read-only and a failed strategy never affects the others.

use thiserror::Error;

/// Errors a reduction strategy can surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The vector is too short to give every worker a non-empty chunk.
    /// Surfaced before any work is dispatched.
    #[error("vector length {len} cannot be split into {workers} non-empty chunks")]
    InvalidLength { len: usize, workers: usize },

    /// A dispatched worker failed to produce its partial result. The whole
    /// invocation fails; there is no retry and no partial result.
    #[error("a worker in the '{strategy}' strategy failed to produce a result")]
    WorkerFailure { strategy: &'static str },
}
