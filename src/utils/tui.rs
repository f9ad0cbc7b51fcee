//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the benchmark CLI.

use std::thread;
use std::time::Duration;

use terminal_size::{terminal_size, Width};

use crate::config::{BenchConfig, DispatchMode};
use crate::error::Error;
use crate::utils::timer::format_millis;

const NAME_COL: usize = 16;
const RESULT_COL: usize = 22;
const ELAPSED_COL: usize = 12;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn table_width() -> usize {
    NAME_COL + RESULT_COL + ELAPSED_COL + 2
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Parallel Dot Product Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the run parameters and the worker count versus the host's
/// hardware concurrency. The hardware count is informational only; it
/// never sizes the worker pool.
pub fn print_run_info(cfg: &BenchConfig, n: usize, seed: u64) {
    let hardware = thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    let dispatch = match cfg.dispatch {
        DispatchMode::Eager => "eager",
        DispatchMode::Deferred => "deferred",
    };

    println!("  n = {}, seed = {}, dispatch = {}", n, seed, dispatch);
    println!(
        "  Using {} of {} hardware threads",
        cfg.worker_count, hardware
    );
    println!();
}

/// Print the results table header
pub fn print_table_top() {
    println!("  {}", "─".repeat(table_width()));
    println!(
        "  {:<name$} {:>result$} {:>elapsed$}",
        "Strategy",
        "Result",
        "Elapsed",
        name = NAME_COL,
        result = RESULT_COL,
        elapsed = ELAPSED_COL
    );
    println!("  {}", "─".repeat(table_width()));
}

/// Print one strategy's computed scalar and elapsed time
pub fn print_strategy_row(name: &str, value: f64, elapsed: Duration) {
    println!(
        "  {:<name$} {:>result$.6} {:>elapsed$}",
        name,
        value,
        format_millis(elapsed),
        name = NAME_COL,
        result = RESULT_COL,
        elapsed = ELAPSED_COL
    );
}

/// Print a failed strategy; its timing line is skipped
pub fn print_strategy_error(name: &str, err: &Error) {
    println!("  {:<name$} skipped: {}", name, err, name = NAME_COL);
}
