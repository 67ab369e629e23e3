//! Game rules around the core evaluator
//!
//! Settings, the round state machine, keyboard hints, answer picking and
//! session statistics.

mod keyboard;
mod picker;
mod round;
mod settings;
mod stats;

pub use keyboard::{KEYBOARD_ROWS, KeyboardHints};
pub use picker::{PickError, pick_answer};
pub use round::{Round, RoundError, RoundState, Row, SubmitError, SubmitOutcome};
pub use settings::{
    DEFAULT_ATTEMPTS, Difficulty, GameSettings, MAX_ATTEMPTS, MAX_WORD_LENGTH, MIN_WORD_LENGTH,
    SettingsError,
};
pub use stats::Statistics;
