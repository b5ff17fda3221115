//! Game configuration

use crate::core::DEFAULT_WORD_LENGTH;
use thiserror::Error;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Longest word length a game may be configured with
pub const MAX_WORD_LENGTH: usize = 16;

/// Rules for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    WordLength(usize),
    #[error("At least one attempt is required")]
    NoAttempts,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the word length is out of range or no attempts are allowed.
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        let config = Self {
            word_length,
            max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError` describing the first invalid field.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength(self.word_length));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::WordLength(0)));
        assert_eq!(GameConfig::new(17, 6), Err(ConfigError::WordLength(17)));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::NoAttempts));
        assert!(GameConfig::new(7, 8).is_ok());
    }
}
