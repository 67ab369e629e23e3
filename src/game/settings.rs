//! Round settings and difficulty presets

use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

/// Shortest supported word length
pub const MIN_WORD_LENGTH: usize = 3;
/// Longest supported word length
pub const MAX_WORD_LENGTH: usize = 8;
/// Upper bound on attempts per round
pub const MAX_ATTEMPTS: usize = 10;
/// Attempts given by every preset
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    /// 4-letter words
    Easy,
    /// 5-letter words
    #[default]
    Normal,
    /// 6-letter words
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn word_length(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Normal => 5,
            Self::Hard => 6,
        }
    }

    #[must_use]
    pub const fn settings(self) -> GameSettings {
        GameSettings {
            word_length: self.word_length(),
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Invalid settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("word length must be between {min} and {max}, got {0}", min = MIN_WORD_LENGTH, max = MAX_WORD_LENGTH)]
    WordLength(usize),
    #[error("attempts must be between 1 and {max}, got {0}", max = MAX_ATTEMPTS)]
    Attempts(usize),
}

/// Word length and attempt limit for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    word_length: usize,
    max_attempts: usize,
}

impl GameSettings {
    /// Validated settings
    ///
    /// # Errors
    /// Returns `SettingsError` when either value is out of range.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameSettings;
    ///
    /// let settings = GameSettings::new(5, 6).unwrap();
    /// assert_eq!(settings.word_length(), 5);
    /// assert!(GameSettings::new(2, 6).is_err());
    /// assert!(GameSettings::new(5, 0).is_err());
    /// ```
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, SettingsError> {
        if word_length < MIN_WORD_LENGTH || word_length > MAX_WORD_LENGTH {
            return Err(SettingsError::WordLength(word_length));
        }
        if max_attempts == 0 || max_attempts > MAX_ATTEMPTS {
            return Err(SettingsError::Attempts(max_attempts));
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    /// Start from a preset and apply optional overrides
    ///
    /// # Errors
    /// Returns `SettingsError` when an override is out of range.
    pub fn resolve(
        difficulty: Difficulty,
        word_length: Option<usize>,
        max_attempts: Option<usize>,
    ) -> Result<Self, SettingsError> {
        let preset = difficulty.settings();
        Self::new(
            word_length.unwrap_or(preset.word_length),
            max_attempts.unwrap_or(preset.max_attempts),
        )
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Difficulty::default().settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(Difficulty::Easy.settings(), GameSettings::new(4, 6).unwrap());
        assert_eq!(Difficulty::Normal.settings(), GameSettings::new(5, 6).unwrap());
        assert_eq!(Difficulty::Hard.settings(), GameSettings::new(6, 6).unwrap());
        assert_eq!(GameSettings::default().word_length(), 5);
    }

    #[test]
    fn bounds() {
        assert!(GameSettings::new(MIN_WORD_LENGTH, 1).is_ok());
        assert!(GameSettings::new(MAX_WORD_LENGTH, MAX_ATTEMPTS).is_ok());
        assert_eq!(
            GameSettings::new(MAX_WORD_LENGTH + 1, 6),
            Err(SettingsError::WordLength(MAX_WORD_LENGTH + 1))
        );
        assert_eq!(
            GameSettings::new(5, MAX_ATTEMPTS + 1),
            Err(SettingsError::Attempts(MAX_ATTEMPTS + 1))
        );
    }

    #[test]
    fn resolve_applies_overrides() {
        let settings = GameSettings::resolve(Difficulty::Easy, None, Some(8)).unwrap();
        assert_eq!(settings.word_length(), 4);
        assert_eq!(settings.max_attempts(), 8);

        let settings = GameSettings::resolve(Difficulty::Hard, Some(7), None).unwrap();
        assert_eq!(settings.word_length(), 7);
        assert_eq!(settings.max_attempts(), DEFAULT_ATTEMPTS);

        assert!(GameSettings::resolve(Difficulty::Normal, Some(1), None).is_err());
    }

    #[test]
    fn difficulty_display() {
        assert_eq!(Difficulty::Normal.to_string(), "normal");
    }
}
