//! Interactive dot product benchmark.
//!
//! Prompts for the vector length `n` on standard input, generates one
//! seeded vector pair, then times each reduction strategy against it.

use std::io::{self, BufRead, Write};

use parallel_dot::config::BenchConfig;
use parallel_dot::strategies::available_strategies;
use parallel_dot::tui;
use parallel_dot::vectors::{seeded_pair, DEFAULT_SEED};

fn main() {
    let cfg = BenchConfig::default();

    print!("Enter n, the length of the two vectors v1 and v2: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        eprintln!("Failed to read from stdin.");
        std::process::exit(1);
    }
    let n: usize = match line.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("'{}' is not a valid vector length.", line.trim());
            std::process::exit(1);
        }
    };

    // One shared read-only vector pair for every strategy.
    let (v1, v2) = seeded_pair(n, DEFAULT_SEED);

    tui::print_header();
    tui::print_run_info(&cfg, n, DEFAULT_SEED);
    tui::print_table_top();

    for strategy in available_strategies() {
        match (strategy.function)(&cfg, &v1, &v2) {
            Ok((value, elapsed)) => tui::print_strategy_row(strategy.name, value, elapsed),
            Err(e) => tui::print_strategy_error(strategy.name, &e),
        }
    }
    println!();
}
