//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, and the loader for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;
use loader::{load_from_file, words_from_slice};
use std::io;
use std::path::Path;

/// Guessable words and possible targets
#[derive(Debug, Clone)]
pub struct WordBank {
    pub allowed: Vec<Word>,
    pub targets: Vec<Word>,
}

impl WordBank {
    /// The lists shipped with the game
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            allowed: words_from_slice(ALLOWED),
            targets: words_from_slice(TARGETS),
        }
    }

    /// A custom list used both for guesses and targets
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = load_from_file(path)?;
        Ok(Self {
            allowed: words.clone(),
            targets: words,
        })
    }
}
