//! Per-letter verdicts

use std::fmt;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Right letter, right position
    Correct,
    /// Letter is in the goal, but elsewhere, and the goal still has a copy to spare
    Misplaced,
    /// Nothing left in the goal to match this letter
    Absent,
}

impl Classification {
    /// Compact symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse one symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for misplaced
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a sequence of verdicts from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Returns `None` on any unknown symbol.
///
/// # Examples
/// ```
/// use wordle_game::core::{Classification, parse_marks};
///
/// let marks = parse_marks("GY-").unwrap();
/// assert_eq!(
///     marks,
///     [Classification::Correct, Classification::Misplaced, Classification::Absent]
/// );
/// assert_eq!(parse_marks("🟩🟨⬜"), Some(marks));
/// assert!(parse_marks("GX").is_none());
/// ```
#[must_use]
pub fn parse_marks(s: &str) -> Option<Vec<Classification>> {
    s.chars().map(Classification::from_symbol).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for mark in [
            Classification::Correct,
            Classification::Misplaced,
            Classification::Absent,
        ] {
            assert_eq!(Classification::from_symbol(mark.symbol()), Some(mark));
        }
    }

    #[test]
    fn parse_marks_accepts_mixed_notation() {
        let p1 = parse_marks("GYG--").unwrap();
        let p2 = parse_marks("🟩🟨🟩⬜⬜").unwrap();
        let p3 = parse_marks("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
    }

    #[test]
    fn parse_marks_invalid() {
        assert!(parse_marks("GXGGY").is_none());
        assert_eq!(parse_marks(""), Some(Vec::new()));
    }
}
