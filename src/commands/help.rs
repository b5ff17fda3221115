//! Game rules

use crate::config::GameConfig;
use crate::core::{Word, score};
use crate::output::formatters::guess_row;

/// Print the rules with a few scored examples
pub fn print_rules(config: &GameConfig) {
    println!("\nHow to play\n");
    println!(
        "  - Guess the hidden {}-letter word in {} tries or less",
        config.word_length, config.max_attempts
    );
    println!("  - Each guess must be a word from the word list");
    println!("  - After each guess the tiles show how close you were\n");

    // Example pairs chosen so each tile color shows up
    let examples = [
        ("pears", "ducks", "The S is in the word and in the correct spot"),
        ("apple", "blunt", "The L is in the word but in the wrong spot"),
        ("grape", "stick", "None of the letters are in the word"),
    ];

    for (guess, target, explanation) in examples {
        if let (Ok(guess), Ok(target)) = (Word::new(guess), Word::new(target))
            && let Ok(feedback) = score(&guess, &target)
        {
            println!("  {}", guess_row(&guess, &feedback));
            println!("  {explanation}\n");
        }
    }
}
