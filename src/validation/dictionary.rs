//! Dictionary of accepted guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of words a player may guess
///
/// Membership only. Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw strings
    ///
    /// Entries are lowercased; entries that are not valid words are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::validation::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "SLATE", "n0pe"]);
    /// assert!(dictionary.contains("slate"));
    /// assert!(!dictionary.contains("n0pe"));
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|s| Word::new(s.as_ref().trim()).ok())
            .map(|w| w.text().to_string())
            .collect();
        Self { words }
    }

    /// Exact membership test; the caller normalises case
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a Word> for Dictionary {
    fn from_iter<T: IntoIterator<Item = &'a Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.text().to_string()).collect(),
        }
    }
}
