//! Session statistics
//!
//! Kept in memory for the lifetime of the process only.

use super::{MAX_ATTEMPTS, Round, RoundState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: [0; MAX_ATTEMPTS + 1],
        }
    }
}

impl Statistics {
    /// Record a finished round; unfinished rounds are ignored
    pub fn record(&mut self, round: &Round) {
        match round.state() {
            RoundState::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(round.attempts_used()) {
                    *slot += 1;
                }
            }
            RoundState::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
            _ => {}
        }
    }

    /// Win rate in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
