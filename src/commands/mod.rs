//! Command implementations

pub mod help;
pub mod score;
pub mod simple;
pub mod stats;

pub use help::print_rules;
pub use score::{ScoreResult, score_words};
pub use simple::{LineGuesses, TerminalPresenter, run_simple};
pub use stats::load_or_reset;
