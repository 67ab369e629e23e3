//! Guess analysis command
//!
//! Evaluates a guess against every answer of its length and reports how well
//! the resulting feedback splits the answer pool.

use crate::core::{Answer, Feedback, Word};
use crate::validation::{Dictionary, ValidationError, validate};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub total_answers: usize,
    /// Number of different feedback rows the guess can produce
    pub distinct_feedback: usize,
    /// Worst case: answers sharing the most common feedback
    pub largest_bucket: usize,
    /// Expected answers left after seeing the feedback
    pub expected_remaining: f64,
    /// Shannon entropy of the feedback distribution in bits
    pub entropy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("no {length}-letter answers to analyze against")]
    NoAnswers { length: usize },
}

/// Analyze a guess against the answer pool
///
/// # Errors
///
/// Returns an error if the guess is not a dictionary word or no answer shares
/// its length.
pub fn analyze_guess(
    guess: &str,
    dictionary: &Dictionary,
    answers: &[Word],
) -> Result<AnalysisResult, AnalyzeError> {
    let length = guess.chars().count();
    let guess = validate(guess, length, dictionary)?;

    let buckets = group_by_feedback(&guess, answers);
    let total_answers: usize = buckets.values().sum();
    if total_answers == 0 {
        return Err(AnalyzeError::NoAnswers { length });
    }

    let total = total_answers as f64;
    let largest_bucket = buckets.values().copied().max().unwrap_or(0);
    let expected_remaining = buckets
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        / total;
    let entropy = buckets
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_answers,
        distinct_feedback: buckets.len(),
        largest_bucket,
        expected_remaining,
        entropy,
    })
}

/// Count answers of the guess's length by the feedback they produce
fn group_by_feedback(guess: &Word, answers: &[Word]) -> FxHashMap<Feedback, usize> {
    answers
        .par_iter()
        .filter(|answer| answer.len() == guess.len())
        .fold(FxHashMap::default, |mut counts, answer| {
            let feedback = Feedback::evaluate(guess, &Answer::new(answer.clone()));
            *counts.entry(feedback).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (feedback, count) in right {
                *left.entry(feedback).or_insert(0) += count;
            }
            left
        })
}
