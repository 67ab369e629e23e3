//! Random answer selection

use super::GameSettings;
use crate::core::{Answer, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("no {length}-letter answers available")]
    NoAnswers { length: usize },
}

/// Draw an answer with the configured length
///
/// # Errors
/// Returns `PickError::NoAnswers` if the pool holds no word of that length.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::game::{GameSettings, pick_answer};
/// use wordle_game::wordlists::loader::words_from_slice;
///
/// let pool = words_from_slice(&["cake", "crane", "slate"]);
/// let mut rng = StdRng::seed_from_u64(7);
/// let answer = pick_answer(&pool, GameSettings::new(4, 6).unwrap(), &mut rng).unwrap();
/// assert_eq!(answer.word().text(), "cake");
/// ```
pub fn pick_answer<R: Rng + ?Sized>(
    pool: &[Word],
    settings: GameSettings,
    rng: &mut R,
) -> Result<Answer, PickError> {
    let length = settings.word_length();
    let candidates: Vec<&Word> = pool.iter().filter(|w| w.len() == length).collect();

    candidates
        .choose(rng)
        .map(|&word| Answer::new(word.clone()))
        .ok_or(PickError::NoAnswers { length })
}
