//! Core domain types for the game
//!
//! Pure, I/O-free types: validated words, per-letter verdicts and the
//! scorer that produces them.

mod classification;
mod feedback;
mod word;

pub use classification::{Classification, parse_marks};
pub use feedback::{Feedback, ValidationError, score};
pub use word::{Word, WordError};
