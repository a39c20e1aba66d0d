//! Formatting utilities for terminal output
//!
//! Pure mappings from verdicts to display tokens. Nothing here writes.

use crate::core::{Classification, Feedback};

/// Display color of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Green,
    Yellow,
    Red,
}

/// One displayed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub tint: Tint,
}

#[must_use]
pub const fn tint(mark: Classification) -> Tint {
    match mark {
        Classification::Correct => Tint::Green,
        Classification::Misplaced => Tint::Yellow,
        Classification::Absent => Tint::Red,
    }
}

#[must_use]
pub const fn emoji(mark: Classification) -> char {
    match mark {
        Classification::Correct => '🟩',
        Classification::Misplaced => '🟨',
        Classification::Absent => '⬜',
    }
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.marks().iter().copied().map(emoji).collect()
}

/// Uppercase letters paired with their tint
#[must_use]
pub fn tiles(feedback: &Feedback) -> Vec<Tile> {
    feedback
        .iter()
        .map(|(letter, mark)| Tile {
            letter: char::from(letter).to_ascii_uppercase(),
            tint: tint(mark),
        })
        .collect()
}

/// Emoji rows for a finished game, one per guess
#[must_use]
pub fn share_grid(history: &[Feedback]) -> String {
    history
        .iter()
        .map(feedback_to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message for a win after `attempts` guesses out of `max_guesses`
#[must_use]
pub const fn win_message(attempts: usize, max_guesses: usize) -> &'static str {
    match attempts {
        1 => "Wow, an Ace! You guessed the word on the first try!",
        2 => "Amazing, a Deuce! You guessed the word on the second try!",
        n if n == max_guesses => "Phew, you made it! You guessed the word on the last try!",
        _ => "Congratulations! You guessed the word!",
    }
}
