//! Guess scoring
//!
//! Scores a guess against the target, handling duplicate letters the way the
//! game does: exact matches are credited first, then the remaining letters of
//! the target are handed out left to right as `Misplaced`.

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Scoring contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Guess has {guess} letters but the target has {target}")]
    InvalidInput { guess: usize, target: usize },
}

/// Target letters not yet claimed by a verdict
///
/// Maps letter to remaining count.
#[derive(Debug, Clone)]
struct LetterPool(FxHashMap<u8, u8>);

impl LetterPool {
    fn from_word(word: &Word) -> Self {
        Self(word.letter_counts())
    }

    /// Claim one instance of `letter`, returning false if none remain
    fn take(&mut self, letter: u8) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark every exact position match and remove it from the pool
/// 2. Second pass: left to right over the unresolved positions, mark `Misplaced`
///    while the pool still holds the letter, otherwise `Miss`
///
/// A letter is therefore never credited more times than it occurs in the target,
/// and earlier positions win when there are not enough copies to go round.
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if the words differ in length.
///
/// # Examples
/// ```
/// use wordo::core::{score, Verdict, Word};
///
/// let guess = Word::new("train").unwrap();
/// let target = Word::new("tenor").unwrap();
/// let feedback = score(&guess, &target).unwrap();
///
/// assert_eq!(
///     feedback.verdicts(),
///     &[Verdict::Exact, Verdict::Misplaced, Verdict::Miss, Verdict::Miss, Verdict::Misplaced]
/// );
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<Feedback, ScoreError> {
    if guess.len() != target.len() {
        return Err(ScoreError::InvalidInput {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut verdicts = vec![Verdict::Miss; guess.len()];
    let mut pool = LetterPool::from_word(target);

    // First pass: exact matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            verdicts[i] = Verdict::Exact;
            pool.take(g);
        }
    }

    // Second pass: misplaced letters from what is left
    for (verdict, &letter) in verdicts.iter_mut().zip(guess.letters()) {
        if *verdict != Verdict::Exact && pool.take(letter) {
            *verdict = Verdict::Misplaced;
        }
    }

    Ok(Feedback::new(verdicts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Exact, Misplaced, Miss};

    fn verdicts(guess: &str, target: &str) -> Vec<Verdict> {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        score(&guess, &target).unwrap().verdicts().to_vec()
    }

    #[test]
    fn identical_words_all_exact() {
        for word in ["hello", "crane", "aaaaa", "melee", "zonal"] {
            assert_eq!(verdicts(word, word), vec![Exact; 5], "{word}");
        }
    }

    #[test]
    fn disjoint_words_all_miss() {
        assert_eq!(verdicts("hello", "spams"), vec![Miss; 5]);
        assert_eq!(verdicts("abcde", "fghij"), vec![Miss; 5]);
    }

    #[test]
    fn known_cases() {
        assert_eq!(verdicts("hello", "hello"), vec![Exact; 5]);
        assert_eq!(
            verdicts("drain", "float"),
            vec![Miss, Miss, Misplaced, Miss, Miss]
        );
        assert_eq!(
            verdicts("gauge", "range"),
            vec![Miss, Exact, Miss, Exact, Exact]
        );
        assert_eq!(
            verdicts("melee", "erect"),
            vec![Miss, Misplaced, Miss, Misplaced, Miss]
        );
        assert_eq!(
            verdicts("array", "spray"),
            vec![Miss, Miss, Exact, Exact, Exact]
        );
        assert_eq!(
            verdicts("train", "tenor"),
            vec![Exact, Misplaced, Miss, Miss, Misplaced]
        );
    }

    #[test]
    fn exact_match_claims_letter_before_earlier_misplaced() {
        // The only 'e' in the target sits at the end, so the earlier 'e' gets nothing
        assert_eq!(
            verdicts("geese", "prone"),
            vec![Miss, Miss, Miss, Miss, Exact]
        );
    }

    #[test]
    fn earlier_positions_claim_pool_first() {
        // One 'o' available: first unresolved 'o' wins it
        assert_eq!(
            verdicts("ooxxx", "abcdo"),
            vec![Misplaced, Miss, Miss, Miss, Miss]
        );
        // Two 'o's: one exact, one misplaced (robot vs floor)
        assert_eq!(
            verdicts("robot", "floor"),
            vec![Misplaced, Misplaced, Miss, Exact, Miss]
        );
    }

    #[test]
    fn letter_credit_never_exceeds_target_count() {
        let pairs = [
            ("melee", "erect"),
            ("geese", "prone"),
            ("speed", "erase"),
            ("array", "spray"),
            ("llama", "hello"),
            ("eerie", "enemy"),
        ];

        for (guess, target) in pairs {
            let g = Word::new(guess).unwrap();
            let t = Word::new(target).unwrap();
            let feedback = score(&g, &t).unwrap();
            let target_counts = t.letter_counts();

            let mut credited: FxHashMap<u8, u8> = FxHashMap::default();
            for (&letter, &verdict) in g.letters().iter().zip(feedback.verdicts()) {
                if verdict != Miss {
                    *credited.entry(letter).or_insert(0) += 1;
                }
            }

            for (letter, count) in credited {
                let available = target_counts.get(&letter).copied().unwrap_or(0);
                assert!(
                    count <= available,
                    "{guess} vs {target}: '{}' credited {count} times, target has {available}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn case_is_normalized_before_scoring() {
        let guess = Word::new("GAUGE").unwrap();
        let target = Word::new("range").unwrap();
        assert_eq!(
            score(&guess, &target).unwrap().verdicts(),
            &[Miss, Exact, Miss, Exact, Exact]
        );
    }

    #[test]
    fn length_mismatch_is_invalid_input() {
        let guess = Word::new("planet").unwrap();
        let target = Word::new("plane").unwrap();
        assert_eq!(
            score(&guess, &target),
            Err(ScoreError::InvalidInput {
                guess: 6,
                target: 5
            })
        );
    }

    #[test]
    fn scoring_other_lengths() {
        assert_eq!(verdicts("tops", "spot"), vec![Misplaced; 4]);
        assert_eq!(
            verdicts("planets", "plaster"),
            vec![Exact, Exact, Exact, Miss, Misplaced, Misplaced, Misplaced]
        );
    }
}
