//! Utility modules for timing and console output.

pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use timer::{format_millis, time};
