//! Rendering boundary
//!
//! Everything the game shows goes through a [`Renderer`]. The console
//! implementation paints tiles with `colored`; tests swap in a recorder.

use super::formatters::{Tint, tiles};
use crate::core::{Feedback, Word};
use colored::{Color, Colorize};
use std::io::{self, Write};

/// Sink for game output
pub trait Renderer {
    /// Print a line of plain text
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Print a prompt without a line break
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Print a guess with its per-letter verdicts
    fn feedback(&mut self, feedback: &Feedback) -> io::Result<()>;

    /// Reveal the goal word
    fn reveal(&mut self, goal: &Word) -> io::Result<()>;
}

impl From<Tint> for Color {
    fn from(tint: Tint) -> Self {
        match tint {
            Tint::Green => Self::Green,
            Tint::Yellow => Self::Yellow,
            Tint::Red => Self::Red,
        }
    }
}

/// Colored terminal output
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl ConsoleRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn feedback(&mut self, feedback: &Feedback) -> io::Result<()> {
        for tile in tiles(feedback) {
            let letter = tile.letter.to_string();
            write!(self.out, "{}", letter.color(Color::from(tile.tint)).bold())?;
        }
        writeln!(self.out)
    }

    fn reveal(&mut self, goal: &Word) -> io::Result<()> {
        writeln!(
            self.out,
            "The word was: {}",
            goal.text().to_uppercase().green().bold()
        )
    }
}
