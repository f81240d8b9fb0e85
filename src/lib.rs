//! Wordle Game
//!
//! Guess a hidden 5-letter word in six tries, with per-letter feedback after
//! each guess and a running average of guesses per win kept across sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterResult, Word, evaluate};
//!
//! let answer = Word::new("pride").unwrap();
//! let guess = Word::new("grace").unwrap();
//!
//! let row = evaluate(&answer, &guess);
//! assert_eq!(row.results()[1], LetterResult::Correct);
//! println!("{row}");
//! ```

// Core domain types
pub mod core;

// Session state and the game wiring
pub mod game;

// Answer selection and guess validation
pub mod source;

// Persistent score history
pub mod stats;

// Config file support
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
