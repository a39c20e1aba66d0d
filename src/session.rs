//! Game session
//!
//! State for a single game: the goal word, the guesses made so far and the
//! guess limit. Performs no I/O; the play command feeds it lines and renders
//! what comes back.

use crate::core::{Feedback, Word};
use crate::wordlists::WordList;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Rules for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
        }
    }
}

/// Error type for invalid game rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("guess limit must be at least 1")]
    ZeroGuesses,
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if either value is zero.
    pub const fn new(word_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }
        Ok(Self {
            word_length,
            max_guesses,
        })
    }
}

/// Error type for sessions that cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word list holds {list}-letter words but the game expects {config} letters")]
    LengthMismatch { list: usize, config: usize },
    #[error("goal word {goal:?} does not have {expected} letters")]
    GoalLength { goal: String, expected: usize },
    #[error("word list is empty")]
    NoWords,
}

/// A rejected guess; never costs an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Invalid guess. The word has {expected} letters.")]
    WrongLength { expected: usize, actual: usize },
    #[error("Invalid guess. Use letters only.")]
    NotAlphabetic(String),
    #[error("Invalid guess, not a valid word.")]
    UnknownWord(String),
    #[error("The game is already over.")]
    GameOver,
}

/// Where the game stands after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress { remaining: usize },
    Won { attempts: usize },
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    pub outcome: Outcome,
}

/// One game against one goal word
#[derive(Debug)]
pub struct Session<'a> {
    words: &'a WordList,
    config: GameConfig,
    goal: Word,
    history: Vec<Feedback>,
    finished: Option<Outcome>,
}

impl<'a> Session<'a> {
    /// Start a game with a goal drawn from `words` using `rng`
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the list's word length disagrees with `config`.
    pub fn new<R: Rng + ?Sized>(
        words: &'a WordList,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        check_length(words, config)?;
        let goal = words.choose(rng).cloned().ok_or(SessionError::NoWords)?;
        debug!("goal word chosen: {goal}");
        Ok(Self::start(words, config, goal))
    }

    /// Start a game with a fixed goal
    ///
    /// The goal need not be in `words`; guessing it always wins.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the goal or the list has the wrong length.
    pub fn with_goal(
        words: &'a WordList,
        config: GameConfig,
        goal: Word,
    ) -> Result<Self, SessionError> {
        check_length(words, config)?;
        if goal.len() != config.word_length {
            return Err(SessionError::GoalLength {
                goal: goal.text().to_string(),
                expected: config.word_length,
            });
        }
        Ok(Self::start(words, config, goal))
    }

    fn start(words: &'a WordList, config: GameConfig, goal: Word) -> Self {
        Self {
            words,
            config,
            goal,
            history: Vec::with_capacity(config.max_guesses),
            finished: None,
        }
    }

    /// Submit a line of player input
    ///
    /// Input is trimmed and case-insensitive. Rejected input leaves the
    /// session untouched.
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the game is over, or the guess has the wrong
    /// length, holds non-letters, or is not a known word.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let text = input.trim();
        let actual = text.chars().count();
        if actual != self.config.word_length {
            return Err(GuessError::WrongLength {
                expected: self.config.word_length,
                actual,
            });
        }

        let guess = Word::new(text).map_err(|_| GuessError::NotAlphabetic(text.to_string()))?;
        if guess != self.goal && !self.words.contains(&guess) {
            return Err(GuessError::UnknownWord(guess.text().to_string()));
        }

        // Guess and goal both have the configured length at this point
        let feedback =
            Feedback::calculate(&guess, &self.goal).map_err(|_| GuessError::WrongLength {
                expected: self.goal.len(),
                actual,
            })?;
        self.history.push(feedback.clone());

        let attempts = self.attempts();
        let outcome = if feedback.is_solved() {
            Outcome::Won { attempts }
        } else if attempts >= self.config.max_guesses {
            Outcome::Lost
        } else {
            Outcome::InProgress {
                remaining: self.remaining(),
            }
        };

        debug!("guess {attempts}: {guess} -> {}", feedback.pattern());
        if !matches!(outcome, Outcome::InProgress { .. }) {
            info!("game finished after {attempts} guesses: {outcome:?}");
            self.finished = Some(outcome);
        }

        Ok(Turn { feedback, outcome })
    }

    #[must_use]
    pub fn goal(&self) -> &Word {
        &self.goal
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Accepted guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.attempts())
    }

    /// Final outcome, once the game is won or lost
    #[must_use]
    pub const fn finished(&self) -> Option<Outcome> {
        self.finished
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.finished.is_some()
    }
}

const fn check_length(words: &WordList, config: GameConfig) -> Result<(), SessionError> {
    if words.word_length() == config.word_length {
        Ok(())
    } else {
        Err(SessionError::LengthMismatch {
            list: words.word_length(),
            config: config.word_length,
        })
    }
}
