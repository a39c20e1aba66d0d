//! Wordle
//!
//! A terminal word-guessing game. Guess the hidden word within a fixed number
//! of attempts; each guess comes back with per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{score, Classification};
//!
//! let feedback = score("robot", "floor").unwrap();
//! assert_eq!(feedback.marks()[3], Classification::Correct);
//! assert_eq!(feedback.pattern(), "YY-G-");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
