//! Length and dictionary checks for a submitted guess

use super::Dictionary;
use crate::core::Word;
use thiserror::Error;

/// Why a guess was rejected
///
/// These are expected player mistakes, not faults. The messages are shown
/// to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Your input word is too short!")]
    TooShort { length: usize, required: usize },
    #[error("Your input word is too long!")]
    TooLong { length: usize, required: usize },
    #[error("Your input word is not a valid English word!")]
    NotAWord,
}

/// Validate a raw guess
///
/// Length is checked before the dictionary: a guess of the wrong length is
/// never looked up. Length counts characters, and the guess is lowercased
/// before lookup.
///
/// # Errors
/// - `TooShort` when the guess has fewer than `required_length` characters
/// - `TooLong` when it has more
/// - `NotAWord` when the length matches but the dictionary does not hold it
///
/// # Examples
/// ```
/// use wordle_game::validation::{Dictionary, ValidationError, validate};
///
/// let dictionary = Dictionary::from_words(["crane"]);
///
/// assert_eq!(validate("CRANE", 5, &dictionary).unwrap().text(), "crane");
/// assert!(matches!(validate("cran", 5, &dictionary), Err(ValidationError::TooShort { .. })));
/// assert!(matches!(validate("cranes", 5, &dictionary), Err(ValidationError::TooLong { .. })));
/// assert_eq!(validate("xxxxx", 5, &dictionary), Err(ValidationError::NotAWord));
/// ```
pub fn validate(
    guess: &str,
    required_length: usize,
    dictionary: &Dictionary,
) -> Result<Word, ValidationError> {
    let length = guess.chars().count();

    if length < required_length {
        return Err(ValidationError::TooShort {
            length,
            required: required_length,
        });
    }
    if length > required_length {
        return Err(ValidationError::TooLong {
            length,
            required: required_length,
        });
    }

    let normalized = guess.to_lowercase();
    if !dictionary.contains(&normalized) {
        return Err(ValidationError::NotAWord);
    }

    // Dictionary entries are always valid words
    Word::new(normalized).map_err(|_| ValidationError::NotAWord)
}
