//! Wordo
//!
//! A terminal word-guessing game with exact duplicate-letter scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordo::core::{Verdict, Word, score};
//!
//! let guess = Word::new("melee").unwrap();
//! let target = Word::new("erect").unwrap();
//!
//! // Only as many E's are credited as the target holds
//! let feedback = score(&guess, &target).unwrap();
//! assert_eq!(feedback.count(Verdict::Misplaced), 2);
//! println!("{}", feedback.to_emoji());
//! ```

// Game rules
pub mod config;

// Core domain types and scoring
pub mod core;

// Session state machine and attempt loop
pub mod game;

// Player statistics
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
