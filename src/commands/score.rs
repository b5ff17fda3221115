//! Score command
//!
//! Scores one guess against one target without playing a game.

use crate::core::{Feedback, Word, score};
use anyhow::{Context, Result};

/// Result of scoring a pair of words
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;
    let feedback = score(&guess, &target)?;

    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
