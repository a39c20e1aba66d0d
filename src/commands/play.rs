//! Interactive game loop
//!
//! Reads guesses line by line, hands them to the session and renders what
//! comes back.

use crate::core::Word;
use crate::output::{Renderer, share_grid, win_message};
use crate::session::{Outcome, Session};
use log::debug;
use std::io::{self, BufRead};

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub attempts: usize,
    pub goal: Word,
}

/// Play one game to completion
///
/// Ends on a win, on running out of guesses, or when `input` is exhausted.
/// A session that is already over reads no input. The goal is revealed in
/// every case.
///
/// # Errors
///
/// Returns an I/O error if reading input or rendering fails.
pub fn run_play<R: BufRead, D: Renderer>(
    session: &mut Session<'_>,
    mut input: R,
    renderer: &mut D,
) -> io::Result<GameSummary> {
    let config = session.config();
    renderer.line("Welcome to Wordle!")?;
    renderer.line(&format!(
        "The word to guess has {} letters. You have {} guesses.",
        config.word_length, config.max_guesses
    ))?;

    if session.is_over() {
        renderer.reveal(session.goal())?;
    }

    while !session.is_over() {
        renderer.prompt("Enter your guess: ")?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            renderer.line("")?;
            renderer.line("No more input, ending the game.")?;
            renderer.reveal(session.goal())?;
            break;
        }

        let turn = match session.submit(&line) {
            Ok(turn) => turn,
            Err(e) => {
                debug!("rejected guess {:?}: {e:?}", line.trim());
                renderer.line(&e.to_string())?;
                continue;
            }
        };

        renderer.line("Guess results:")?;
        renderer.feedback(&turn.feedback)?;

        match turn.outcome {
            Outcome::InProgress { remaining } => {
                renderer.line(&format!("Guesses left: {remaining}"))?;
            }
            Outcome::Won { attempts } => {
                renderer.line(win_message(attempts, config.max_guesses))?;
                renderer.reveal(session.goal())?;
            }
            Outcome::Lost => {
                renderer.line("You ran out of guesses!")?;
                renderer.reveal(session.goal())?;
            }
        }
    }

    let won = matches!(session.finished(), Some(Outcome::Won { .. }));
    if session.attempts() > 0 {
        let score = if won {
            session.attempts().to_string()
        } else {
            "X".to_string()
        };
        renderer.line("")?;
        renderer.line(&format!("{score}/{}", config.max_guesses))?;
        renderer.line(&share_grid(session.history()))?;
    }

    Ok(GameSummary {
        won,
        attempts: session.attempts(),
        goal: session.goal().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ConsoleRenderer;
    use crate::session::GameConfig;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn words() -> WordList {
        WordList::parse("crane\nslate\neagle\nrobot\nfloor\n", 5).unwrap()
    }

    fn play(goal: &str, config: GameConfig, input: &str) -> (GameSummary, String) {
        colored::control::set_override(false);
        let words = words();
        let mut session = Session::with_goal(&words, config, Word::new(goal).unwrap()).unwrap();
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let summary = run_play(&mut session, Cursor::new(input), &mut renderer).unwrap();
        (summary, String::from_utf8(renderer.into_inner()).unwrap())
    }

    #[test]
    fn first_try_win() {
        let (summary, out) = play("crane", GameConfig::default(), "crane\n");

        assert!(summary.won);
        assert_eq!(summary.attempts, 1);
        assert!(out.contains("Wow, an Ace!"));
        assert!(out.contains("The word was: CRANE"));
        assert!(out.contains("1/6\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn invalid_guesses_are_reported_and_free() {
        let (summary, out) = play("eagle", GameConfig::default(), "abc\nzzzzz\nslate\neagle\n");

        assert!(summary.won);
        assert_eq!(summary.attempts, 2);
        assert!(out.contains("Invalid guess. The word has 5 letters."));
        assert!(out.contains("Invalid guess, not a valid word."));
        assert!(out.contains("Guesses left: 5"));
        assert!(out.contains("Amazing, a Deuce!"));
    }

    #[test]
    fn loss_reveals_goal() {
        let config = GameConfig::new(5, 2).unwrap();
        let (summary, out) = play("robot", config, "crane\nslate\nrobot\n");

        assert!(!summary.won);
        assert_eq!(summary.attempts, 2);
        assert!(out.contains("You ran out of guesses!"));
        assert!(out.contains("The word was: ROBOT"));
        assert!(out.contains("X/2"));
        // The last guess is still shown before the loss
        assert!(out.contains("SLATE"));
    }

    #[test]
    fn end_of_input_ends_the_game() {
        let (summary, out) = play("floor", GameConfig::default(), "robot\n");

        assert!(!summary.won);
        assert_eq!(summary.attempts, 1);
        assert!(out.contains("No more input"));
        assert!(out.contains("The word was: FLOOR"));
    }

    #[test]
    fn finished_session_reads_no_input() {
        colored::control::set_override(false);
        let words = words();
        let mut session =
            Session::with_goal(&words, GameConfig::default(), Word::new("crane").unwrap()).unwrap();
        session.submit("crane").unwrap();
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let summary = run_play(&mut session, Cursor::new("crane\ncrane\n"), &mut renderer).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(summary.won);
        assert_eq!(summary.attempts, 1);
        assert!(!out.contains("Enter your guess"));
        assert!(!out.contains("already over"));
        assert!(out.contains("1/6\n🟩🟩🟩🟩🟩"));
        assert!(!out.contains("X/6"));
    }
}
