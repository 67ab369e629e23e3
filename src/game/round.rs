//! Round controller
//!
//! A round owns its answer, its rows, and an explicit state. Every change of
//! state goes through [`Round::transition`], which only permits:
//!
//! ```text
//! AwaitingInput -> Validating -> Rejected -> AwaitingInput
//!                             -> Accepted -> Evaluated -> AwaitingInput
//!                                                      -> Won | Lost
//! ```
//!
//! Input is only taken in `AwaitingInput`.

use super::{GameSettings, KeyboardHints};
use crate::core::{Answer, Feedback, Word};
use crate::validation::{Dictionary, ValidationError, validate};
use log::{debug, info};
use thiserror::Error;

/// State of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    AwaitingInput,
    Validating,
    Rejected,
    Accepted,
    Evaluated,
    Won,
    Lost,
}

impl RoundState {
    /// Whether `self -> next` is an edge of the round state machine
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::AwaitingInput, Self::Validating)
                | (Self::Validating, Self::Rejected | Self::Accepted)
                | (Self::Rejected | Self::Evaluated, Self::AwaitingInput)
                | (Self::Accepted, Self::Evaluated)
                | (Self::Evaluated, Self::Won | Self::Lost)
        )
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::AwaitingInput)
    }
}

/// Programming errors in round handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("illegal round transition {from:?} -> {to:?}")]
    IllegalTransition { from: RoundState, to: RoundState },
    #[error("answer has {actual} letters but the round expects {expected}")]
    AnswerLength { expected: usize, actual: usize },
}

/// Why a submission did not produce a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("input is disabled while the round is {0:?}")]
    InputDisabled(RoundState),
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub row: Row,
    /// `AwaitingInput`, `Won` or `Lost`
    pub state: RoundState,
    pub attempts_remaining: usize,
}

/// A single game round
#[derive(Debug, Clone)]
pub struct Round {
    answer: Answer,
    settings: GameSettings,
    state: RoundState,
    rows: Vec<Row>,
    hints: KeyboardHints,
}

impl Round {
    /// Start a round
    ///
    /// # Errors
    /// Returns `RoundError::AnswerLength` when the answer does not have the
    /// configured word length.
    pub fn new(answer: Answer, settings: GameSettings) -> Result<Self, RoundError> {
        if answer.len() != settings.word_length() {
            return Err(RoundError::AnswerLength {
                expected: settings.word_length(),
                actual: answer.len(),
            });
        }

        info!(
            "new round: {} letters, {} attempts",
            settings.word_length(),
            settings.max_attempts()
        );

        Ok(Self {
            answer,
            settings,
            state: RoundState::AwaitingInput,
            rows: Vec::with_capacity(settings.max_attempts()),
            hints: KeyboardHints::new(),
        })
    }

    /// Submit a guess
    ///
    /// Runs validation, evaluation and the resulting transitions to
    /// completion before returning. Rejected input leaves the rows untouched
    /// and returns the round to `AwaitingInput`.
    ///
    /// # Errors
    /// - `SubmitError::InputDisabled` if the round is not awaiting input
    /// - `SubmitError::Invalid` if validation rejects the guess
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Answer, Word};
    /// use wordle_game::game::{GameSettings, Round, RoundState};
    /// use wordle_game::validation::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "slate"]);
    /// let answer = Answer::new(Word::new("slate").unwrap());
    /// let mut round = Round::new(answer, GameSettings::new(5, 6).unwrap()).unwrap();
    ///
    /// let outcome = round.submit("crane", &dictionary).unwrap();
    /// assert_eq!(outcome.state, RoundState::AwaitingInput);
    /// assert_eq!(outcome.row.feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    ///
    /// assert_eq!(round.submit("slate", &dictionary).unwrap().state, RoundState::Won);
    /// ```
    pub fn submit(
        &mut self,
        input: &str,
        dictionary: &Dictionary,
    ) -> Result<SubmitOutcome, SubmitError> {
        if !self.state.accepts_input() {
            return Err(SubmitError::InputDisabled(self.state));
        }

        self.transition(RoundState::Validating)?;

        let guess = match validate(input, self.settings.word_length(), dictionary) {
            Ok(word) => word,
            Err(err) => {
                debug!("rejected guess {input:?}: {err:?}");
                self.transition(RoundState::Rejected)?;
                self.transition(RoundState::AwaitingInput)?;
                return Err(err.into());
            }
        };

        self.transition(RoundState::Accepted)?;

        let feedback = Feedback::evaluate(&guess, &self.answer);
        self.hints.record(&guess, &feedback);
        let row = Row { guess, feedback };
        self.rows.push(row.clone());
        self.transition(RoundState::Evaluated)?;

        let next = if row.feedback.is_solved() {
            RoundState::Won
        } else if self.attempts_remaining() == 0 {
            RoundState::Lost
        } else {
            RoundState::AwaitingInput
        };
        self.transition(next)?;

        if next.is_terminal() {
            info!(
                "round over: {next:?} after {} of {} attempts",
                self.rows.len(),
                self.settings.max_attempts()
            );
        }

        Ok(SubmitOutcome {
            row,
            state: next,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    /// Move to `next`, refusing edges the state machine does not have
    ///
    /// # Errors
    /// Returns `RoundError::IllegalTransition` for a missing edge.
    fn transition(&mut self, next: RoundState) -> Result<(), RoundError> {
        if !self.state.can_transition_to(next) {
            return Err(RoundError::IllegalTransition {
                from: self.state,
                to: next,
            });
        }
        debug!("round: {:?} -> {next:?}", self.state);
        self.state = next;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn settings(&self) -> GameSettings {
        self.settings
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.settings.max_attempts().saturating_sub(self.rows.len())
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The answer, for revealing once the round has ended
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Answer {
        &self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crane", "slate", "plate", "level", "eerie", "cake"])
    }

    fn round(answer: &str, attempts: usize) -> Round {
        let answer = Answer::new(Word::new(answer).unwrap());
        Round::new(answer, GameSettings::new(5, attempts).unwrap()).unwrap()
    }

    #[test]
    fn starts_awaiting_input() {
        let round = round("slate", 6);
        assert_eq!(round.state(), RoundState::AwaitingInput);
        assert_eq!(round.attempts_remaining(), 6);
        assert!(round.rows().is_empty());
    }

    #[test]
    fn answer_length_must_match_settings() {
        let answer = Answer::new(Word::new("cake").unwrap());
        let err = Round::new(answer, GameSettings::new(5, 6).unwrap()).unwrap_err();
        assert_eq!(err, RoundError::AnswerLength { expected: 5, actual: 4 });
    }

    #[test]
    fn rejected_input_consumes_no_attempt() {
        let dictionary = dictionary();
        let mut round = round("slate", 6);

        assert!(matches!(
            round.submit("cake", &dictionary),
            Err(SubmitError::Invalid(ValidationError::TooShort { .. }))
        ));
        assert!(matches!(
            round.submit("cranes", &dictionary),
            Err(SubmitError::Invalid(ValidationError::TooLong { .. }))
        ));
        assert_eq!(
            round.submit("zzzzz", &dictionary),
            Err(SubmitError::Invalid(ValidationError::NotAWord))
        );

        assert_eq!(round.state(), RoundState::AwaitingInput);
        assert_eq!(round.attempts_used(), 0);
    }

    #[test]
    fn accepted_guess_records_row() {
        let dictionary = dictionary();
        let mut round = round("level", 6);

        let outcome = round.submit("eerie", &dictionary).unwrap();
        assert_eq!(outcome.state, RoundState::AwaitingInput);
        assert_eq!(outcome.attempts_remaining, 5);
        assert_eq!(
            outcome.row.feedback.results(),
            &[
                LetterResult::Present,
                LetterResult::Correct,
                LetterResult::Absent,
                LetterResult::Absent,
                LetterResult::Absent
            ]
        );
        assert_eq!(round.rows(), &[outcome.row]);
        assert_eq!(round.hints().get(b'e'), Some(LetterResult::Correct));
    }

    #[test]
    fn win_ends_round() {
        let dictionary = dictionary();
        let mut round = round("slate", 6);

        round.submit("crane", &dictionary).unwrap();
        let outcome = round.submit("SLATE", &dictionary).unwrap();

        assert_eq!(outcome.state, RoundState::Won);
        assert!(round.is_over());
        assert_eq!(round.attempts_used(), 2);
    }

    #[test]
    fn win_on_last_attempt_is_won() {
        let dictionary = dictionary();
        let mut round = round("slate", 2);

        round.submit("crane", &dictionary).unwrap();
        assert_eq!(round.submit("slate", &dictionary).unwrap().state, RoundState::Won);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let dictionary = dictionary();
        let mut round = round("slate", 2);

        assert_eq!(
            round.submit("crane", &dictionary).unwrap().state,
            RoundState::AwaitingInput
        );
        let outcome = round.submit("plate", &dictionary).unwrap();
        assert_eq!(outcome.state, RoundState::Lost);
        assert_eq!(outcome.attempts_remaining, 0);
        assert_eq!(round.answer().word().text(), "slate");
    }

    #[test]
    fn input_disabled_after_round_ends() {
        let dictionary = dictionary();
        let mut round = round("slate", 6);
        round.submit("slate", &dictionary).unwrap();

        assert_eq!(
            round.submit("crane", &dictionary),
            Err(SubmitError::InputDisabled(RoundState::Won))
        );
        // Even invalid input is refused without being looked at
        assert_eq!(
            round.submit("x", &dictionary),
            Err(SubmitError::InputDisabled(RoundState::Won))
        );
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn transition_table() {
        use RoundState::{Accepted, AwaitingInput, Evaluated, Lost, Rejected, Validating, Won};

        assert!(AwaitingInput.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Rejected));
        assert!(Validating.can_transition_to(Accepted));
        assert!(Rejected.can_transition_to(AwaitingInput));
        assert!(Accepted.can_transition_to(Evaluated));
        assert!(Evaluated.can_transition_to(AwaitingInput));
        assert!(Evaluated.can_transition_to(Won));
        assert!(Evaluated.can_transition_to(Lost));

        assert!(!AwaitingInput.can_transition_to(Evaluated));
        assert!(!Rejected.can_transition_to(Accepted));
        assert!(!Accepted.can_transition_to(Won));
        assert!(!Won.can_transition_to(AwaitingInput));
        assert!(!Lost.can_transition_to(Validating));
    }

    #[test]
    fn illegal_transition_is_reported() {
        let mut round = round("slate", 6);
        assert_eq!(
            round.transition(RoundState::Won),
            Err(RoundError::IllegalTransition {
                from: RoundState::AwaitingInput,
                to: RoundState::Won
            })
        );
        assert_eq!(round.state(), RoundState::AwaitingInput);
    }
}
