//! Property-based tests for guess scoring.
//!
//! Words are drawn from a four-letter alphabet so duplicates are common.

use proptest::prelude::*;
use wordle_game::core::{Classification, ValidationError, score};

/// Generate a (guess, goal) pair of equal length.
fn word_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..8).prop_flat_map(|len| {
        let word = prop::collection::vec(b'a'..=b'd', len)
            .prop_map(|bytes| String::from_utf8(bytes).unwrap_or_default());
        (word.clone(), word)
    })
}

fn count(word: &str, letter: u8) -> usize {
    word.bytes().filter(|&b| b == letter).count()
}

proptest! {
    #[test]
    fn prop_marked_letters_never_exceed_goal_count((guess, goal) in word_pair()) {
        let feedback = score(&guess, &goal).unwrap();

        for letter in b'a'..=b'd' {
            let marked = feedback
                .iter()
                .filter(|&(l, m)| l == letter && m != Classification::Absent)
                .count();
            prop_assert!(marked <= count(&goal, letter));
            prop_assert_eq!(marked, count(&goal, letter).min(count(&guess, letter)));
        }
    }

    #[test]
    fn prop_exact_match_is_correct((guess, goal) in word_pair()) {
        let feedback = score(&guess, &goal).unwrap();

        for (i, (g, a)) in guess.bytes().zip(goal.bytes()).enumerate() {
            prop_assert_eq!(g == a, feedback.marks()[i] == Classification::Correct);
        }
    }

    #[test]
    fn prop_absent_means_quota_used_up((guess, goal) in word_pair()) {
        let feedback = score(&guess, &goal).unwrap();
        let marks = feedback.marks();
        let letters = guess.as_bytes();

        for i in 0..marks.len() {
            if marks[i] != Classification::Absent {
                continue;
            }
            let c = letters[i];
            let correct_anywhere = (0..marks.len())
                .filter(|&j| letters[j] == c && marks[j] == Classification::Correct)
                .count();
            let misplaced_left = (0..i)
                .filter(|&j| letters[j] == c && marks[j] == Classification::Misplaced)
                .count();
            prop_assert_eq!(count(&goal, c), correct_anywhere + misplaced_left);
        }
    }

    #[test]
    fn prop_misplaced_letter_is_in_goal_elsewhere((guess, goal) in word_pair()) {
        let feedback = score(&guess, &goal).unwrap();

        for (i, (letter, mark)) in feedback.iter().enumerate() {
            if mark == Classification::Misplaced {
                prop_assert!(goal.as_bytes().contains(&letter));
                prop_assert_ne!(goal.as_bytes()[i], letter);
            }
        }
    }

    #[test]
    fn prop_scoring_goal_against_itself_solves((_, goal) in word_pair()) {
        let feedback = score(&goal, &goal).unwrap();
        prop_assert!(feedback.is_solved());
        prop_assert_eq!(feedback.marks().len(), goal.len());
    }

    #[test]
    fn prop_length_mismatch_is_rejected(
        (guess, goal) in word_pair(),
        extra in prop::sample::select(vec!["a", "bc", "dad"]),
    ) {
        let longer = format!("{goal}{extra}");
        let is_length_mismatch = matches!(
            score(&guess, &longer),
            Err(ValidationError::LengthMismatch { .. })
        );
        prop_assert!(is_length_mismatch);
    }
}

#[test]
fn concrete_scenarios() {
    use Classification::{Absent, Correct, Misplaced};

    assert_eq!(score("apple", "apple").unwrap().marks(), [Correct; 5]);
    assert_eq!(
        score("appla", "apple").unwrap().marks(),
        [Correct, Correct, Correct, Correct, Absent]
    );
    assert_eq!(
        score("eagle", "allee").unwrap().marks(),
        [Misplaced, Misplaced, Absent, Misplaced, Correct]
    );
    assert_eq!(score("zzzzz", "crane").unwrap().marks(), [Absent; 5]);
    assert!(score("ab", "abc").is_err());
    assert!(score("a1c", "abc").is_err());
}
