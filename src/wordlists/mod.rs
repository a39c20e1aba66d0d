//! Word lists
//!
//! The set of words a session may pick its goal from and accept as guesses.
//! Loaded once at startup, from a file or from the list compiled into the
//! binary, and read-only afterwards.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list has no words of length {word_length}")]
    Empty { word_length: usize },
}

/// Valid words of a single length
///
/// Keeps first-seen order for selection and a hash set for membership.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_length: usize,
}

impl WordList {
    /// Build a list from words, keeping only those of `word_length`
    ///
    /// Duplicates are collapsed.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no word of that length remains.
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        word_length: usize,
    ) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let mut kept = Vec::new();
        let mut skipped = 0usize;

        for word in words {
            if word.len() != word_length {
                skipped += 1;
                continue;
            }
            if index.insert(word.clone()) {
                kept.push(word);
            }
        }

        if kept.is_empty() {
            return Err(WordListError::Empty { word_length });
        }

        debug!("dropped {skipped} words not of length {word_length}");
        info!("word list ready: {} words of length {word_length}", kept.len());

        Ok(Self {
            words: kept,
            index,
            word_length,
        })
    }

    /// Parse a newline-delimited list
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no line holds a valid word of `word_length`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::parse("crane\nslate\nkiwi\nCRANE\n", 5).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn parse(text: &str, word_length: usize) -> Result<Self, WordListError> {
        Self::new(loader::words_from_text(text), word_length)
    }

    /// Load a newline-delimited list from a file
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if the file cannot be read, or
    /// `WordListError::Empty` if it holds no word of `word_length`.
    pub fn load<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self, WordListError> {
        Self::new(loader::load_from_file(path)?, word_length)
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if the bundled list has no word of `word_length`.
    pub fn embedded(word_length: usize) -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(WORDS), word_length)
    }

    /// Check whether a word is in the list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// All words, in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word in the list
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
