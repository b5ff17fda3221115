//! Game sessions
//!
//! The session state machine, the attempt loop that drives it, and the
//! vocabulary and target providers it consumes.

pub mod driver;
mod error;
mod session;
mod target;
mod vocabulary;

pub use driver::{GuessInput, GuessSource, Presenter, StatsSink, play};
pub use error::{GuessError, SetupError};
pub use session::{AttemptRecord, GameResult, Outcome, Session};
pub use target::{RandomTargets, TargetSource};
pub use vocabulary::Vocabulary;
