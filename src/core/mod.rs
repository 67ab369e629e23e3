//! Core domain types for the game
//!
//! Pure value types with no I/O: words, the round answer, and the
//! per-letter feedback produced by evaluating a guess.

mod answer;
mod feedback;
mod word;

pub use answer::Answer;
pub use feedback::{Feedback, LetterResult};
pub use word::{Word, WordError};
