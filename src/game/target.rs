//! Target word selection

use super::SetupError;
use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the hidden word for each new session
pub trait TargetSource {
    fn next_target(&mut self) -> Word;
}

/// Uniform random choice from a list of targets
///
/// With a seed the sequence of targets is reproducible.
#[derive(Debug, Clone)]
pub struct RandomTargets {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomTargets {
    /// Create a source over the `word_length`-letter words in `targets`
    ///
    /// # Errors
    /// Returns `SetupError::NoTargets` if no target has the requested length.
    pub fn new(targets: &[Word], word_length: usize, seed: Option<u64>) -> Result<Self, SetupError> {
        let words: Vec<Word> = targets
            .iter()
            .filter(|w| w.len() == word_length)
            .cloned()
            .collect();

        if words.is_empty() {
            return Err(SetupError::NoTargets(word_length));
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl TargetSource for RandomTargets {
    fn next_target(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn picks_from_list() {
        let targets = words_from_slice(&["crane", "slate", "hello"]);
        let mut source = RandomTargets::new(&targets, 5, None).unwrap();

        for _ in 0..20 {
            let target = source.next_target();
            assert!(targets.contains(&target));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let targets = words_from_slice(&["crane", "slate", "hello", "drain", "float"]);
        let mut a = RandomTargets::new(&targets, 5, Some(42)).unwrap();
        let mut b = RandomTargets::new(&targets, 5, Some(42)).unwrap();

        for _ in 0..10 {
            assert_eq!(a.next_target(), b.next_target());
        }
    }

    #[test]
    fn filters_by_length() {
        let targets = words_from_slice(&["crane", "planet"]);
        let mut source = RandomTargets::new(&targets, 6, Some(1)).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.next_target().text(), "planet");
    }

    #[test]
    fn empty_list_is_an_error() {
        let targets = words_from_slice(&["crane"]);
        assert!(matches!(
            RandomTargets::new(&targets, 7, None),
            Err(SetupError::NoTargets(7))
        ));
    }
}
