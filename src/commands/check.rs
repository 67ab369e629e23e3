//! Evaluate an arbitrary guess against an arbitrary answer

use crate::core::{Answer, Feedback, Word, WordError};
use thiserror::Error;

/// Result of checking one guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Invalid guess: {0}")]
    InvalidGuess(WordError),
    #[error("Invalid answer: {0}")]
    InvalidAnswer(WordError),
    #[error("Guess has {guess} letters but the answer has {answer}")]
    LengthMismatch { guess: usize, answer: usize },
}

/// Evaluate `guess` against `answer`
///
/// No dictionary is consulted; both only need to be words of equal length.
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, CheckError> {
    let guess = Word::new(guess).map_err(CheckError::InvalidGuess)?;
    let answer = Word::new(answer).map_err(CheckError::InvalidAnswer)?;

    if guess.len() != answer.len() {
        return Err(CheckError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let feedback = Feedback::evaluate(&guess, &Answer::new(answer.clone()));

    Ok(CheckResult {
        guess,
        answer,
        feedback,
    })
}
