//! The secret word of a round
//!
//! An `Answer` pairs the word with its per-letter occurrence counts. Both are
//! computed once when the round starts and never change afterwards.

use super::Word;
use rustc_hash::FxHashMap;

/// Immutable answer for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    word: Word,
    counts: FxHashMap<u8, usize>,
}

impl Answer {
    /// Build an answer, deriving the letter counts from the word
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Answer, Word};
    ///
    /// let answer = Answer::new(Word::new("level").unwrap());
    /// assert_eq!(answer.count_of(b'l'), 2);
    /// assert_eq!(answer.count_of(b'z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: Word) -> Self {
        let counts = word.letter_counts();
        Self { word, counts }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.word.letters()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// How many times `letter` occurs in the answer
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Occurrence counts for every letter of the answer
    ///
    /// Evaluation clones this map as its working pool.
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &FxHashMap<u8, usize> {
        &self.counts
    }
}

impl From<Word> for Answer {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_counts_match_word() {
        let answer = Answer::new(Word::new("apple").unwrap());
        assert_eq!(answer.count_of(b'p'), 2);
        assert_eq!(answer.count_of(b'a'), 1);
        assert_eq!(answer.count_of(b'q'), 0);
        assert_eq!(answer.counts().values().sum::<usize>(), 5);
    }

    #[test]
    fn answer_exposes_word() {
        let answer: Answer = Word::new("crane").unwrap().into();
        assert_eq!(answer.word().text(), "crane");
        assert_eq!(answer.letters(), b"crane");
        assert_eq!(answer.len(), 5);
    }
}
