//! Formatting utilities for terminal output

use crate::core::LetterResult;
use crate::game::{KEYBOARD_ROWS, KeyboardHints, Row};
use colored::{ColoredString, Colorize};

/// A single letter tile colored by its result
#[must_use]
pub fn letter_tile(letter: char, result: Option<LetterResult>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        Some(LetterResult::Correct) => text.black().on_green().bold(),
        Some(LetterResult::Present) => text.black().on_yellow().bold(),
        Some(LetterResult::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess row as colored tiles
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.guess
        .letters()
        .iter()
        .zip(row.feedback.results())
        .map(|(&letter, &result)| letter_tile(char::from(letter), Some(result)).to_string())
        .collect()
}

/// The keyboard with every guessed letter colored by its best result
#[must_use]
pub fn keyboard_lines(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| letter_tile(char::from(letter), hints.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
