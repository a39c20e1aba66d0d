//! Word list loading utilities
//!
//! Turns newline-delimited text into validated words. Lines are trimmed and
//! lowercased; blank lines and anything that is not purely alphabetic are
//! skipped.

use super::WordListError;
use crate::core::Word;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse words out of newline-delimited text
///
/// Invalid entries are skipped; length filtering happens in [`super::WordList`].
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_text;
///
/// let words = words_from_text("crane\n  Slate \n\nsh0rt\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    words_from_slice(&text.lines().collect::<Vec<_>>())
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = slice
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} non-alphabetic word list entries");
    }

    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("read word list from {}", path.display());
    Ok(words_from_text(&content))
}
