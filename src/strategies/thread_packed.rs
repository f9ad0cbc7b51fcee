//! Thread-per-chunk strategy with channel completion handles.
//!
//! Each chunk gets its own OS thread, always started eagerly. The worker
//! packages its partial result into an mpsc channel; the receiver end is
//! the completion handle. The strategy waits on the handles in ascending
//! chunk order, then drops the join handles without joining: once every
//! result is in, thread teardown finishes in the background and is only
//! guaranteed to complete by process exit.

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::config::BenchConfig;
use crate::error::Error;
use crate::plan::plan_chunks;
use crate::reduce::partial_dot;
use crate::utils::timer::time;

/// Compute the dot product with one eagerly started thread per chunk.
///
/// Elapsed time covers dispatch through final combination; the setup
/// copies of the inputs are made beforehand and are not measured.
/// Fails with [`Error::InvalidLength`] before any dispatch when the
/// vectors cannot be split into `cfg.worker_count` non-empty chunks, and
/// with [`Error::WorkerFailure`] if any worker exits without sending its
/// partial result.
pub fn dot_thread_packed(
    cfg: &BenchConfig,
    a: &[f64],
    b: &[f64],
) -> Result<(f64, Duration), Error> {
    let chunks = plan_chunks(a.len(), cfg.worker_count)?;

    // Plain `thread::spawn` needs `'static` data, so the inputs are copied
    // once into reference-counted slices shared by every worker.
    let a: Arc<[f64]> = Arc::from(a);
    let b: Arc<[f64]> = Arc::from(b);

    let (result, elapsed) = time(|| -> Result<f64, Error> {
        let mut workers = Vec::with_capacity(chunks.len());
        for &chunk in &chunks {
            let (tx, rx) = mpsc::sync_channel(1);
            let (a, b) = (Arc::clone(&a), Arc::clone(&b));
            let handle = thread::spawn(move || {
                let _ = tx.send(partial_dot(&a, &b, chunk));
            });
            workers.push((handle, rx));
        }

        // Combine in ascending chunk order. A worker that panics before
        // sending drops its sender, which surfaces here as a recv error.
        let mut total = 0.0;
        for (_handle, rx) in &workers {
            total += rx.recv().map_err(|_| Error::WorkerFailure {
                strategy: "thread_packed",
            })?;
        }

        // Results are in; the handles are dropped, not joined.
        drop(workers);
        Ok(total)
    });

    Ok((result?, elapsed))
}
