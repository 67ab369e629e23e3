//! Word lists for the game
//!
//! Embedded lists compiled into the binary, plus loading of custom lists.
//! The dictionary decides which guesses are accepted; the answer pool is
//! where rounds draw their secret word from.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::validation::Dictionary;
use std::io;
use std::path::Path;

/// Dictionary plus answer pool for a session
#[derive(Debug, Clone)]
pub struct WordLists {
    pub dictionary: Dictionary,
    pub answers: Vec<Word>,
}

impl WordLists {
    /// The embedded lists
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            dictionary: loader::dictionary_from_slice(ALLOWED),
            answers: loader::words_from_slice(ANSWERS),
        }
    }

    /// A custom list used both as dictionary and answer pool
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words))
    }

    /// Use the same words for the dictionary and the answer pool
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let dictionary = words.iter().collect();
        Self {
            dictionary,
            answers: words,
        }
    }
}
