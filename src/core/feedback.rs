//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct: same letter at the same position in the answer
//! - Present: letter occurs elsewhere and that occurrence is not yet used up
//! - Absent: letter does not occur, or every occurrence is already credited

use super::{Answer, Word};
use std::fmt;

/// Classification of one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Emoji tile used for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one result per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterResult>);

impl Feedback {
    /// Evaluate `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and take them out
    ///    of the answer's letter pool
    /// 2. Second pass: every other position is Present while the pool still
    ///    holds that letter (consuming one), Absent otherwise
    ///
    /// Exact matches are credited first, so a letter can never be reported
    /// more often than it occurs in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Answer, Feedback, LetterResult::*, Word};
    ///
    /// let answer = Answer::new(Word::new("level").unwrap());
    /// let guess = Word::new("eerie").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &answer);
    /// assert_eq!(feedback.results(), &[Present, Correct, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Answer) -> Self {
        let mut results = vec![LetterResult::Absent; guess.len()];
        let mut available = answer.counts().clone();

        // First pass: exact matches
        for (i, (&letter, result)) in guess.letters().iter().zip(results.iter_mut()).enumerate() {
            if answer.letters().get(i) == Some(&letter) {
                *result = LetterResult::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: loose matches from what is left in the pool
        for (&letter, result) in guess.letters().iter().zip(results.iter_mut()) {
            if *result == LetterResult::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                *result = LetterResult::Present;
                *count -= 1;
            }
        }

        Self(results)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Feedback::parse("GXG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .map(LetterResult::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Count positions with the given result
    #[must_use]
    pub fn count(&self, result: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// Render as an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
