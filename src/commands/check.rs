//! One-shot scoring
//!
//! Scores a single guess against a goal word without starting a session.

use crate::core::{Feedback, ValidationError, score};
use crate::output::{Renderer, feedback_to_emoji};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Score `guess` against `goal` and render the result
///
/// # Errors
///
/// Returns `CheckError::Validation` if either word is invalid or the lengths
/// differ, before anything is rendered.
pub fn run_check<D: Renderer>(
    guess: &str,
    goal: &str,
    renderer: &mut D,
) -> Result<Feedback, CheckError> {
    let feedback = score(guess, goal)?;

    renderer.feedback(&feedback)?;
    renderer.line(&format!(
        "{}  {}",
        feedback.pattern(),
        feedback_to_emoji(&feedback)
    ))?;

    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ConsoleRenderer;

    #[test]
    fn check_renders_pattern() {
        colored::control::set_override(false);
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let feedback = run_check("eagle", "allee", &mut renderer).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(feedback.pattern(), "YY-YG");
        assert_eq!(out, "EAGLE\nYY-YG  🟨🟨⬜🟨🟩\n");
    }

    #[test]
    fn check_fails_before_rendering() {
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let err = run_check("ab", "abc", &mut renderer).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Validation(ValidationError::LengthMismatch { guess: 2, goal: 3 })
        ));
        assert!(renderer.into_inner().is_empty());
    }
}
