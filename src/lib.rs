//! Wordle Game
//!
//! A Wordle-style word guessing game: guess validation, duplicate-aware
//! letter feedback, and a round state machine, with terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Answer, Feedback, Word};
//!
//! let answer = Answer::new(Word::new("slate").unwrap());
//! let guess = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
//! ```

// Core domain types
pub mod core;

// Guess validation
pub mod validation;

// Round rules and state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
