//! Guess scoring
//!
//! Compares a guess against the goal word and classifies every letter as
//! correct, misplaced or absent. For every letter `c`, the number of
//! positions marked correct or misplaced never exceeds the number of times
//! `c` appears in the goal.

use super::word::{Word, WordError};
use super::Classification;
use thiserror::Error;

/// Error raised when scoring is attempted on invalid input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid guess: {0}")]
    Guess(#[source] WordError),
    #[error("invalid goal word: {0}")]
    Goal(#[source] WordError),
    #[error("guess has {guess} letters but the goal word has {goal}")]
    LengthMismatch { guess: usize, goal: usize },
}

/// Scored guess: the guessed word plus one verdict per letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Word,
    marks: Vec<Classification>,
}

/// Score `guess` against `goal`, validating both strings first
///
/// # Errors
/// Returns `ValidationError` if either string is empty or not purely
/// alphabetic, or if their lengths differ. Nothing is scored in that case.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, parse_marks};
///
/// let feedback = score("eagle", "allee").unwrap();
/// assert_eq!(feedback.marks(), parse_marks("YY-YG").unwrap());
///
/// assert!(score("ab", "abc").is_err());
/// assert!(score("a1c", "abc").is_err());
/// ```
pub fn score(guess: &str, goal: &str) -> Result<Feedback, ValidationError> {
    let guess = Word::new(guess).map_err(ValidationError::Guess)?;
    let goal = Word::new(goal).map_err(ValidationError::Goal)?;
    Feedback::calculate(&guess, &goal)
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `goal`
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the pool
    /// 2. Second pass, left to right: mark a letter misplaced while the pool
    ///    still holds a copy of it, taking that copy out
    ///
    /// Exact matches are consumed before any misplaced one, wherever they
    /// sit, and among misplaced duplicates the leftmost win.
    ///
    /// # Errors
    /// Returns `ValidationError::LengthMismatch` if the words differ in length.
    pub fn calculate(guess: &Word, goal: &Word) -> Result<Self, ValidationError> {
        if guess.len() != goal.len() {
            return Err(ValidationError::LengthMismatch {
                guess: guess.len(),
                goal: goal.len(),
            });
        }

        let mut marks = vec![Classification::Absent; guess.len()];
        let mut goal_available = goal.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.letters().iter().zip(goal.letters()).enumerate() {
            if g == a {
                marks[i] = Classification::Correct;
                if let Some(count) = goal_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but the goal still has a copy left
        for (mark, &letter) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Classification::Correct {
                continue;
            }
            if let Some(count) = goal_available.get_mut(&letter)
                && *count > 0
            {
                *mark = Classification::Misplaced;
                *count -= 1;
            }
        }

        Ok(Self {
            guess: guess.clone(),
            marks,
        })
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// One verdict per letter, in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Classification] {
        &self.marks
    }

    /// Pair each guessed letter with its verdict
    pub fn iter(&self) -> impl Iterator<Item = (u8, Classification)> + '_ {
        self.guess.letters().iter().copied().zip(self.marks.iter().copied())
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Classification::Correct)
    }

    /// Count the letters carrying a given verdict
    #[must_use]
    pub fn count(&self, mark: Classification) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Compact form such as "GY-GY"
    #[must_use]
    pub fn pattern(&self) -> String {
        self.marks.iter().map(|m| m.symbol()).collect()
    }
}
