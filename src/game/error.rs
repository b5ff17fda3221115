//! Game errors

use crate::config::ConfigError;
use crate::core::{ScoreError, WordError};
use thiserror::Error;

/// Why a submitted guess was not accepted
///
/// Most variants are player mistakes: the session is left untouched and the
/// player is asked again. See [`GuessError::is_recoverable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Word must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    NotInVocabulary(String),
    #[error("'{0}' was already guessed")]
    DuplicateGuess(String),
    #[error(transparent)]
    InvalidInput(#[from] ScoreError),
    #[error("The game is already over")]
    SessionOver,
}

impl GuessError {
    /// True for errors the player can fix by typing another guess
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidWord(_)
                | Self::WrongLength { .. }
                | Self::NotInVocabulary(_)
                | Self::DuplicateGuess(_)
        )
    }
}

/// Errors creating a session or its word sources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Target '{target}' has {actual} letters, expected {expected}")]
    TargetLength {
        target: String,
        expected: usize,
        actual: usize,
    },
    #[error("Word list holds {actual}-letter words, expected {expected}")]
    VocabularyLength { expected: usize, actual: usize },
    #[error("No {0}-letter target words available")]
    NoTargets(usize),
}
