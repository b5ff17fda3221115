//! Permitted guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Read-only set of words the player may guess
///
/// Always a superset of the target words it was built with.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: FxHashSet<Word>,
    word_length: usize,
}

impl Vocabulary {
    /// Build a vocabulary of `word_length`-letter words
    ///
    /// Both lists are merged; words of any other length are skipped.
    #[must_use]
    pub fn new(word_length: usize, allowed: &[Word], targets: &[Word]) -> Self {
        let words = allowed
            .iter()
            .chain(targets)
            .filter(|w| w.len() == word_length)
            .cloned()
            .collect();

        Self { words, word_length }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn includes_targets_and_allowed() {
        let allowed = words_from_slice(&["crane", "slate"]);
        let targets = words_from_slice(&["hello"]);
        let vocabulary = Vocabulary::new(5, &allowed, &targets);

        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains(&Word::new("crane").unwrap()));
        assert!(vocabulary.contains(&Word::new("HELLO").unwrap()));
        assert!(!vocabulary.contains(&Word::new("zobra").unwrap()));
    }

    #[test]
    fn skips_other_lengths() {
        let allowed = words_from_slice(&["crane", "planet", "at"]);
        let vocabulary = Vocabulary::new(5, &allowed, &[]);

        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.word_length(), 5);
        assert!(!vocabulary.contains(&Word::new("planet").unwrap()));
    }

    #[test]
    fn duplicates_collapse() {
        let allowed = words_from_slice(&["crane", "CRANE"]);
        let targets = words_from_slice(&["crane"]);
        let vocabulary = Vocabulary::new(5, &allowed, &targets);
        assert_eq!(vocabulary.len(), 1);
    }
}
