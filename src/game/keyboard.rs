//! On-screen keyboard hints
//!
//! Tracks the best result seen so far for each letter so the keyboard can be
//! colored: Correct beats Present beats Absent.

use crate::core::{Feedback, LetterResult, Word};
use rustc_hash::FxHashMap;

/// QWERTY rows as drawn by the front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known result per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: FxHashMap<u8, LetterResult>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the hints
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.letters().iter().zip(feedback.results()) {
            self.hints
                .entry(letter)
                .and_modify(|best| *best = (*best).max(result))
                .or_insert(result);
        }
    }

    /// Hint for a letter, `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterResult> {
        self.hints.get(&letter.to_ascii_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Answer;

    fn record(hints: &mut KeyboardHints, guess: &str, answer: &str) {
        let guess = Word::new(guess).unwrap();
        let answer = Answer::new(Word::new(answer).unwrap());
        hints.record(&guess, &Feedback::evaluate(&guess, &answer));
    }

    #[test]
    fn unseen_letters_have_no_hint() {
        let hints = KeyboardHints::new();
        assert_eq!(hints.get(b'a'), None);
    }

    #[test]
    fn best_result_wins() {
        let mut hints = KeyboardHints::new();
        // E correct, A and S present, R and I absent
        record(&mut hints, "raise", "slate");
        assert_eq!(hints.get(b'r'), Some(LetterResult::Absent));
        assert_eq!(hints.get(b'a'), Some(LetterResult::Present));

        // A upgraded to correct
        record(&mut hints, "plate", "slate");
        assert_eq!(hints.get(b'a'), Some(LetterResult::Correct));

        // And never downgraded
        record(&mut hints, "adept", "slate");
        assert_eq!(hints.get(b'a'), Some(LetterResult::Correct));
    }

    #[test]
    fn duplicate_letter_keeps_best_position() {
        let mut hints = KeyboardHints::new();
        // APPLE has one L: two guessed L's come back absent, the third correct
        record(&mut hints, "lolly", "apple");
        assert_eq!(hints.get(b'l'), Some(LetterResult::Correct));
        assert_eq!(hints.get(b'y'), Some(LetterResult::Absent));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut hints = KeyboardHints::new();
        record(&mut hints, "crane", "crane");
        assert_eq!(hints.get(b'C'), Some(LetterResult::Correct));
        assert_eq!(hints.get(b'c'), Some(LetterResult::Correct));
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }
}
