//! Guess validation
//!
//! A guess must have the round's length and be a dictionary word before it
//! is evaluated.

mod dictionary;
mod validator;

pub use dictionary::Dictionary;
pub use validator::{ValidationError, validate};
