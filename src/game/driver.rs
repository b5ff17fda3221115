//! The attempt loop
//!
//! Connects a [`Session`] to its collaborators: where guesses come from, where
//! feedback goes, and where finished games are recorded.

use super::session::{AttemptRecord, GameResult, Outcome, Session};
use super::GuessError;
use anyhow::Result;

/// What the player did on their turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Guess(String),
    Abandon,
}

/// Supplies player input
pub trait GuessSource {
    /// Block until the player enters something
    ///
    /// # Errors
    /// Returns an error if input cannot be read.
    fn next_guess(&mut self, session: &Session<'_>) -> Result<GuessInput>;
}

/// Receives everything the player should see
pub trait Presenter {
    fn attempt(&mut self, session: &Session<'_>, record: &AttemptRecord);
    fn rejected(&mut self, session: &Session<'_>, error: &GuessError);
    fn finished(&mut self, session: &Session<'_>);
}

/// Receives finished (won or lost) games
pub trait StatsSink {
    /// # Errors
    /// Returns an error if the result cannot be stored.
    fn record(&mut self, result: GameResult) -> Result<()>;
}

/// Drive `session` until it ends
///
/// Recoverable rejections are shown and the player is asked again. Abandoned
/// sessions are reported to the presenter but never to `stats`.
///
/// # Errors
/// Returns an error if a collaborator fails or a guess breaks the scoring contract.
pub fn play<G, P, S>(
    session: &mut Session<'_>,
    guesses: &mut G,
    presenter: &mut P,
    stats: &mut S,
) -> Result<Outcome>
where
    G: GuessSource + ?Sized,
    P: Presenter + ?Sized,
    S: StatsSink + ?Sized,
{
    while !session.is_terminal() {
        match guesses.next_guess(session)? {
            GuessInput::Abandon => session.abandon(),
            GuessInput::Guess(text) => match session.submit_guess(&text) {
                Ok(record) => {
                    let record = record.clone();
                    presenter.attempt(session, &record);
                }
                Err(e) if e.is_recoverable() => presenter.rejected(session, &e),
                Err(e) => return Err(e.into()),
            },
        }
    }

    presenter.finished(session);

    if let Some(result) = session.result() {
        stats.record(result)?;
    }

    Ok(session.outcome())
}
