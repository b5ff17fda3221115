//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, Keyboard, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter by its verdict
///
/// `None` is a letter without feedback yet (keyboard keys not guessed).
#[must_use]
pub fn letter_tile(letter: u8, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match verdict {
        Some(Verdict::Exact) => text.black().bold().on_green(),
        Some(Verdict::Misplaced) => text.black().bold().on_yellow(),
        Some(Verdict::Miss) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect()
}

/// Render the on-screen keyboard, one string per row
///
/// Letters known to be absent are blanked out.
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| match keyboard.state(letter) {
                    Some(Verdict::Miss) => "   ".to_string(),
                    state => letter_tile(letter, state).to_string(),
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).ceil() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
