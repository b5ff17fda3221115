//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, press enter.

use crate::config::GameConfig;
use crate::game::{
    AttemptRecord, GuessError, GuessInput, GuessSource, Outcome, Presenter, Session, StatsSink,
    TargetSource, Vocabulary, play,
};
use crate::output::{print_board, print_outcome};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Reads guesses line by line
///
/// `exit`, `quit` or end of input abandon the game.
pub struct LineGuesses<R> {
    reader: R,
}

impl<R: BufRead> LineGuesses<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;

        Ok((read > 0).then(|| line.trim().to_string()))
    }
}

impl<R: BufRead> GuessSource for LineGuesses<R> {
    fn next_guess(&mut self, session: &Session<'_>) -> Result<GuessInput> {
        let prompt = format!(
            "Guess {}/{} ('exit' to quit)",
            session.attempts_used() + 1,
            session.max_attempts()
        );

        Ok(match self.prompt(&prompt)? {
            None => GuessInput::Abandon,
            Some(line) if matches!(line.to_lowercase().as_str(), "exit" | "quit") => {
                GuessInput::Abandon
            }
            Some(line) => GuessInput::Guess(line),
        })
    }
}

/// Prints the board after every guess
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn attempt(&mut self, session: &Session<'_>, _record: &AttemptRecord) {
        if !session.is_terminal() {
            print_board(session);
        }
    }

    fn rejected(&mut self, _session: &Session<'_>, error: &GuessError) {
        println!("{}", format!("❌ {error}").red());
    }

    fn finished(&mut self, session: &Session<'_>) {
        if session.outcome() != Outcome::Abandoned {
            print_board(session);
        }
        print_outcome(session);
    }
}

/// Run the simple interactive CLI mode
///
/// Plays games until the player abandons one or declines to play again.
///
/// # Errors
///
/// Returns an error if input cannot be read, a session cannot be created, or
/// statistics cannot be saved.
pub fn run_simple<R, T, S>(
    input: R,
    vocabulary: &Vocabulary,
    targets: &mut T,
    config: &GameConfig,
    stats: &mut S,
) -> Result<()>
where
    R: BufRead,
    T: TargetSource + ?Sized,
    S: StatsSink + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                  < W O R D O >                   ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries or less.\n",
        config.word_length, config.max_attempts
    );

    let mut guesses = LineGuesses::new(input);
    let mut presenter = TerminalPresenter;

    loop {
        let mut session = Session::new(targets.next_target(), vocabulary, config)?;
        print_board(&session);

        let outcome = play(&mut session, &mut guesses, &mut presenter, stats)?;
        if outcome == Outcome::Abandoned {
            return Ok(());
        }

        match guesses.prompt("Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}
