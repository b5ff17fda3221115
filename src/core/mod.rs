//! Core domain types for the game
//!
//! Words, verdicts and the scoring algorithm. Everything here is pure and
//! deterministic; nothing touches I/O.

mod feedback;
mod keyboard;
mod scorer;
mod word;

pub use feedback::{Feedback, Verdict};
pub use keyboard::{KEYBOARD_ROWS, Keyboard};
pub use scorer::{ScoreError, score};
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
