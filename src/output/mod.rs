//! Terminal output formatting
//!
//! Display utilities for the line-based mode and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_score, print_statistics};
