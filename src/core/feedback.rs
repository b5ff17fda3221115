//! Per-letter verdicts and whole-guess feedback
//!
//! Each position of a scored guess carries one of three verdicts:
//! - `Miss` (letter not available in the target)
//! - `Misplaced` (letter in the target, different position)
//! - `Exact` (letter in the correct position)

use std::fmt;
use std::ops::Index;

/// Feedback for a single letter position
///
/// Ordered from least to most informative, so the best verdict seen for a
/// letter is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Miss,
    Misplaced,
    Exact,
}

impl Verdict {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Miss => '⬜',
            Self::Misplaced => '🟨',
            Self::Exact => '🟩',
        }
    }
}

/// Ordered verdicts for a whole guess, one per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    #[must_use]
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Exact`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Exact)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Exact, Misplaced, Miss};

    #[test]
    fn verdict_ordering() {
        assert!(Miss < Misplaced);
        assert!(Misplaced < Exact);
        assert_eq!(Miss.max(Exact), Exact);
    }

    #[test]
    fn feedback_solved() {
        assert!(Feedback::new(vec![Exact; 5]).is_solved());
        assert!(!Feedback::new(vec![Exact, Exact, Exact, Exact, Misplaced]).is_solved());
        assert!(!Feedback::new(Vec::new()).is_solved());
    }

    #[test]
    fn feedback_counts() {
        let feedback = Feedback::new(vec![Exact, Misplaced, Miss, Miss, Misplaced]);
        assert_eq!(feedback.count(Exact), 1);
        assert_eq!(feedback.count(Misplaced), 2);
        assert_eq!(feedback.count(Miss), 2);
        assert_eq!(feedback[1], Misplaced);
    }

    #[test]
    fn feedback_emoji() {
        let feedback = Feedback::new(vec![Exact, Misplaced, Miss, Exact, Misplaced]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(format!("{feedback}"), "🟩🟨⬜🟩🟨");
    }
}
