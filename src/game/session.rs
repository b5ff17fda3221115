//! Game session state machine
//!
//! A session starts `InProgress` and ends `Won`, `Lost` or `Abandoned`. Terminal
//! states are final; a new game needs a new session.

use super::{GuessError, SetupError, Vocabulary};
use crate::config::GameConfig;
use crate::core::{Feedback, Keyboard, Word, score};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Solved on attempt number `attempts`
    Won { attempts: usize },
    Lost,
    /// Player quit mid-game; not a loss and not recorded
    Abandoned,
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    guess: Word,
    feedback: Feedback,
}

impl AttemptRecord {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Result handed to statistics when a game finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub won: bool,
    /// Attempt count for a win, `None` for a loss
    pub attempts_used: Option<usize>,
}

/// A single game
pub struct Session<'a> {
    target: Word,
    vocabulary: &'a Vocabulary,
    max_attempts: usize,
    history: Vec<AttemptRecord>,
    submitted: FxHashSet<Word>,
    keyboard: Keyboard,
    outcome: Outcome,
}

impl<'a> Session<'a> {
    /// Start a new game against `target`
    ///
    /// # Errors
    /// Returns `SetupError` if the config is invalid, or if the target or the
    /// vocabulary is not made of `config.word_length`-letter words.
    pub fn new(
        target: Word,
        vocabulary: &'a Vocabulary,
        config: &GameConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        if target.len() != config.word_length {
            return Err(SetupError::TargetLength {
                target: target.text().to_string(),
                expected: config.word_length,
                actual: target.len(),
            });
        }

        if vocabulary.word_length() != config.word_length {
            return Err(SetupError::VocabularyLength {
                expected: config.word_length,
                actual: vocabulary.word_length(),
            });
        }

        info!(
            word_length = config.word_length,
            max_attempts = config.max_attempts,
            "session started"
        );

        Ok(Self {
            target,
            vocabulary,
            max_attempts: config.max_attempts,
            history: Vec::with_capacity(config.max_attempts),
            submitted: FxHashSet::default(),
            keyboard: Keyboard::new(),
            outcome: Outcome::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// Rejected guesses leave the session exactly as it was and do not use up an
    /// attempt.
    ///
    /// # Errors
    /// - `SessionOver` once the session is terminal
    /// - `InvalidWord`, `WrongLength`, `NotInVocabulary`, `DuplicateGuess` for
    ///   guesses the player should retype
    pub fn submit_guess(&mut self, input: &str) -> Result<&AttemptRecord, GuessError> {
        if self.is_terminal() {
            return Err(GuessError::SessionOver);
        }

        let guess = self.validate(input).inspect_err(|e| {
            debug!(input, error = %e, "guess rejected");
        })?;

        let feedback = score(&guess, &self.target)?;
        self.keyboard.record(&guess, &feedback);
        self.submitted.insert(guess.clone());

        let solved = feedback.is_solved();
        debug!(
            guess = guess.text(),
            feedback = %feedback,
            attempt = self.history.len() + 1,
            "guess accepted"
        );
        self.history.push(AttemptRecord { guess, feedback });

        if solved {
            self.outcome = Outcome::Won {
                attempts: self.history.len(),
            };
            info!(attempts = self.history.len(), "session won");
        } else if self.history.len() >= self.max_attempts {
            self.outcome = Outcome::Lost;
            info!(word = self.target.text(), "session lost");
        }

        Ok(&self.history[self.history.len() - 1])
    }

    fn validate(&self, input: &str) -> Result<Word, GuessError> {
        let guess = Word::new(input)?;

        let expected = self.word_length();
        if guess.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                actual: guess.len(),
            });
        }

        if !self.vocabulary.contains(&guess) {
            return Err(GuessError::NotInVocabulary(guess.text().to_string()));
        }

        if self.submitted.contains(&guess) {
            return Err(GuessError::DuplicateGuess(guess.text().to_string()));
        }

        Ok(guess)
    }

    /// Give up on an in-progress game
    ///
    /// Has no effect once the session is terminal.
    pub fn abandon(&mut self) {
        if self.outcome == Outcome::InProgress {
            info!(attempts = self.history.len(), "session abandoned");
            self.outcome = Outcome::Abandoned;
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The hidden word
    ///
    /// Front ends should only reveal it once the session is terminal.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Statistics entry for a finished game
    ///
    /// `None` while in progress and for abandoned games.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        match self.outcome {
            Outcome::Won { attempts } => Some(GameResult {
                won: true,
                attempts_used: Some(attempts),
            }),
            Outcome::Lost => Some(GameResult {
                won: false,
                attempts_used: None,
            }),
            Outcome::InProgress | Outcome::Abandoned => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        let allowed = words_from_slice(&[
            "crane", "slate", "drain", "float", "gauge", "range", "hello", "train", "tenor",
            "melee", "erect", "array", "spray",
        ]);
        Vocabulary::new(5, &allowed, &[])
    }

    fn session<'a>(vocabulary: &'a Vocabulary, target: &str, max_attempts: usize) -> Session<'a> {
        let config = GameConfig::new(5, max_attempts).unwrap();
        Session::new(Word::new(target).unwrap(), vocabulary, &config).unwrap()
    }

    #[test]
    fn new_session_is_in_progress() {
        let vocab = vocabulary();
        let session = session(&vocab, "range", 6);

        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(!session.is_terminal());
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.attempts_remaining(), 6);
        assert_eq!(session.word_length(), 5);
        assert!(session.result().is_none());
    }

    #[test]
    fn target_length_must_match_config() {
        let vocab = vocabulary();
        let result = Session::new(
            Word::new("planet").unwrap(),
            &vocab,
            &GameConfig::default(),
        );
        assert!(matches!(
            result,
            Err(SetupError::TargetLength {
                expected: 5,
                actual: 6,
                ..
            })
        ));
    }

    #[test]
    fn vocabulary_length_must_match_config() {
        let six = Vocabulary::new(6, &words_from_slice(&["planet"]), &[]);
        let config = GameConfig::new(6, 6).unwrap();
        assert!(Session::new(Word::new("planet").unwrap(), &six, &config).is_ok());

        let five = vocabulary();
        assert_eq!(
            Session::new(Word::new("planet").unwrap(), &five, &config).err(),
            Some(SetupError::VocabularyLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let vocab = vocabulary();
        let config = GameConfig {
            word_length: 5,
            max_attempts: 0,
        };
        assert!(matches!(
            Session::new(Word::new("range").unwrap(), &vocab, &config),
            Err(SetupError::Config(_))
        ));
    }

    #[test]
    fn accepted_guess_is_recorded() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);

        let record = session.submit_guess("GAUGE").unwrap();
        assert_eq!(record.guess().text(), "gauge");
        assert_eq!(
            record.feedback().verdicts(),
            &[
                Verdict::Miss,
                Verdict::Exact,
                Verdict::Miss,
                Verdict::Exact,
                Verdict::Exact
            ]
        );

        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.keyboard().state(b'g'), Some(Verdict::Exact));
    }

    #[test]
    fn exact_guess_wins() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);

        session.submit_guess("crane").unwrap();
        session.submit_guess("range").unwrap();

        assert_eq!(session.outcome(), Outcome::Won { attempts: 2 });
        assert!(session.is_terminal());
        assert_eq!(
            session.result(),
            Some(GameResult {
                won: true,
                attempts_used: Some(2)
            })
        );
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 2);

        session.submit_guess("crane").unwrap();
        session.submit_guess("range").unwrap();

        assert_eq!(session.outcome(), Outcome::Won { attempts: 2 });
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 3);

        session.submit_guess("crane").unwrap();
        session.submit_guess("slate").unwrap();
        assert_eq!(session.outcome(), Outcome::InProgress);

        session.submit_guess("drain").unwrap();
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(
            session.result(),
            Some(GameResult {
                won: false,
                attempts_used: None
            })
        );
    }

    #[test]
    fn rejected_guesses_do_not_use_attempts() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);
        session.submit_guess("crane").unwrap();
        let keyboard_before = session.keyboard().clone();

        assert!(matches!(
            session.submit_guess("zobra"),
            Err(GuessError::NotInVocabulary(w)) if w == "zobra"
        ));
        assert!(matches!(
            session.submit_guess("CRANE"),
            Err(GuessError::DuplicateGuess(w)) if w == "crane"
        ));
        assert!(matches!(
            session.submit_guess("cran"),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 4
            })
        ));
        assert!(matches!(
            session.submit_guess("cr4ne"),
            Err(GuessError::InvalidWord(_))
        ));

        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.keyboard(), &keyboard_before);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn rejections_are_recoverable() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);

        let err = session.submit_guess("zzzzz").unwrap_err();
        assert!(err.is_recoverable());

        session.submit_guess("range").unwrap();
        assert!(session.is_terminal());
    }

    #[test]
    fn out_of_vocabulary_checked_before_duplicate() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);

        assert!(matches!(
            session.submit_guess("zobra"),
            Err(GuessError::NotInVocabulary(_))
        ));
        // Same invalid word again is still reported as not in vocabulary
        assert!(matches!(
            session.submit_guess("zobra"),
            Err(GuessError::NotInVocabulary(_))
        ));
    }

    #[test]
    fn terminal_sessions_reject_guesses() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);
        session.submit_guess("range").unwrap();

        let err = session.submit_guess("crane").unwrap_err();
        assert_eq!(err, GuessError::SessionOver);
        assert!(!err.is_recoverable());
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn abandon_ends_without_result() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);
        session.submit_guess("crane").unwrap();

        session.abandon();
        assert_eq!(session.outcome(), Outcome::Abandoned);
        assert!(session.is_terminal());
        assert!(session.result().is_none());
        assert_eq!(session.submit_guess("range"), Err(GuessError::SessionOver));
    }

    #[test]
    fn abandon_after_win_is_ignored() {
        let vocab = vocabulary();
        let mut session = session(&vocab, "range", 6);
        session.submit_guess("range").unwrap();

        session.abandon();
        assert_eq!(session.outcome(), Outcome::Won { attempts: 1 });
    }

    #[test]
    fn sessions_do_not_share_state() {
        let vocab = vocabulary();
        let mut first = session(&vocab, "range", 6);
        let second = session(&vocab, "range", 6);

        first.submit_guess("crane").unwrap();

        assert_eq!(second.attempts_used(), 0);
        assert_eq!(second.keyboard().state(b'c'), None);
    }
}
