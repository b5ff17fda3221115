//! Display functions for game state and command results

use super::formatters::{create_progress_bar, guess_row, keyboard_rows};
use crate::core::{Feedback, Word};
use crate::game::{Outcome, Session};
use crate::stats::Statistics;
use colored::Colorize;

/// Print the board: every attempt so far plus empty rows for those remaining
pub fn print_board(session: &Session<'_>) {
    println!();
    for record in session.history() {
        println!("   {}", guess_row(record.guess(), record.feedback()));
    }

    let empty_row = " _ ".repeat(session.word_length());
    for _ in 0..session.attempts_remaining() {
        println!("   {}", empty_row.bright_black());
    }

    println!();
    for row in keyboard_rows(session.keyboard()) {
        println!("   {row}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(session: &Session<'_>) {
    match session.outcome() {
        Outcome::Won { attempts } => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "  {}",
                format!(
                    "Winner! Solved in {attempts} {}",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(50).bright_cyan());
        }
        Outcome::Lost => {
            println!("\n{}", "Try again next time".red().bold());
            println!(
                "The correct word was {}",
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        Outcome::Abandoned => {
            println!("\n{}", "Game abandoned".bright_black());
        }
        Outcome::InProgress => {}
    }

    if !session.history().is_empty() {
        println!();
        for record in session.history() {
            println!("  {}", record.feedback().to_emoji());
        }
    }
    println!();
}

/// Print the feedback for a single guess/target pair
pub fn print_score(guess: &Word, target: &Word, feedback: &Feedback) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", guess_row(guess, feedback));
    println!("  {}", feedback.to_emoji());
    if feedback.is_solved() {
        println!("  {}", "Exact match".green());
    }
    println!();
}

/// Print a player's statistics with a guess distribution chart
pub fn print_statistics(player: &str, stats: &Statistics, max_attempts: usize) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(" {}", player.to_uppercase().bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    println!("   Games played:    {}", stats.games_played);
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    if stats.wins == 0 {
        println!("\n   {}", "No wins yet".bright_black());
        println!();
        return;
    }

    if let Some(pct) = stats.win_percentage() {
        println!("   Win %:           {}", pct.to_string().bright_yellow().bold());
    }

    println!("\n   {}", "Guess distribution:".bright_cyan().bold());
    let rows = max_attempts.max(stats.distribution.len());
    for attempts in 1..=rows {
        let count = stats.wins_in(attempts);
        let bar = create_progress_bar(f64::from(count), f64::from(stats.wins), 40);
        println!("   {attempts}: {} {count}", bar.green());
    }
    println!();
}
