//! Keyboard state
//!
//! Tracks the best verdict seen for each letter during one session, so front
//! ends can color an on-screen keyboard.

use super::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

/// QWERTY rows used when drawing the keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best verdict observed per letter
///
/// A letter only ever moves up: once `Exact` it stays `Exact`, and a later
/// `Miss` for a duplicate copy never hides an earlier `Misplaced`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    letters: FxHashMap<u8, Verdict>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the keyboard
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }

    /// Best verdict for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<Verdict> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn record(keyboard: &mut Keyboard, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let feedback = score(&guess, &target).unwrap();
        keyboard.record(&guess, &feedback);
    }

    #[test]
    fn unguessed_letters_have_no_state() {
        let keyboard = Keyboard::new();
        assert_eq!(keyboard.state(b'a'), None);
    }

    #[test]
    fn records_each_letter() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "train", "tenor");

        assert_eq!(keyboard.state(b't'), Some(Verdict::Exact));
        assert_eq!(keyboard.state(b'r'), Some(Verdict::Misplaced));
        assert_eq!(keyboard.state(b'a'), Some(Verdict::Miss));
        assert_eq!(keyboard.state(b'N'), Some(Verdict::Misplaced));
        assert_eq!(keyboard.state(b'z'), None);
    }

    #[test]
    fn duplicate_miss_does_not_downgrade() {
        // melee vs erect: third 'e' is a Miss but the letter is still Misplaced
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "melee", "erect");
        assert_eq!(keyboard.state(b'e'), Some(Verdict::Misplaced));
    }

    #[test]
    fn states_only_upgrade_across_guesses() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "gauge", "range");
        assert_eq!(keyboard.state(b'a'), Some(Verdict::Exact));

        record(&mut keyboard, "crane", "range");
        assert_eq!(keyboard.state(b'a'), Some(Verdict::Exact));
        assert_eq!(keyboard.state(b'r'), Some(Verdict::Misplaced));

        record(&mut keyboard, "range", "range");
        assert_eq!(keyboard.state(b'r'), Some(Verdict::Exact));
    }
}
