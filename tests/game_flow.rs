//! End-to-end checks against the public API and the embedded word lists

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::commands::play_simple;
use wordle_game::core::{Answer, Feedback, LetterResult, Word};
use wordle_game::game::{Difficulty, GameSettings, Round, RoundState, SubmitError, pick_answer};
use wordle_game::validation::{ValidationError, validate};
use wordle_game::wordlists::WordLists;

#[test]
fn every_preset_round_can_be_won_by_guessing_the_answer() {
    let lists = WordLists::builtin();
    let mut rng = StdRng::seed_from_u64(2024);

    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        let settings = difficulty.settings();
        let answer = pick_answer(&lists.answers, settings, &mut rng).unwrap();
        let text = answer.word().text().to_string();
        let mut round = Round::new(answer, settings).unwrap();

        let outcome = round.submit(&text, &lists.dictionary).unwrap();
        assert_eq!(outcome.state, RoundState::Won);
        assert!(outcome.row.feedback.is_solved());
    }
}

#[test]
fn answers_evaluated_against_themselves_are_all_correct() {
    let lists = WordLists::builtin();
    for word in &lists.answers {
        let feedback = Feedback::evaluate(word, &Answer::new(word.clone()));
        assert_eq!(feedback.count(LetterResult::Correct), word.len(), "{word}");
    }
}

#[test]
fn wrong_lengths_are_rejected_before_lookup() {
    let lists = WordLists::builtin();
    for word in lists.answers.iter().step_by(11) {
        let len = word.len();
        assert!(matches!(
            validate(word.text(), len + 1, &lists.dictionary),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(matches!(
            validate(word.text(), len - 1, &lists.dictionary),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate(word.text(), len, &lists.dictionary).is_ok());
    }
}

#[test]
fn losing_round_then_input_is_disabled() {
    let lists = WordLists::builtin();
    let settings = GameSettings::new(5, 3).unwrap();
    let mut round = Round::new(Answer::new(Word::new("level").unwrap()), settings).unwrap();

    for guess in ["eerie", "crane", "slate"] {
        round.submit(guess, &lists.dictionary).unwrap();
    }

    assert_eq!(round.state(), RoundState::Lost);
    assert_eq!(round.rows()[0].feedback.to_emoji(), "🟨🟩⬜⬜⬜");
    assert_eq!(
        round.submit("level", &lists.dictionary),
        Err(SubmitError::InputDisabled(RoundState::Lost))
    );
}

#[test]
fn simple_mode_plays_a_seeded_game() {
    colored::control::set_override(false);
    let lists = WordLists::builtin();
    let settings = GameSettings::default();

    // Same seed as the game below, so this is the answer it will pick
    let answer = pick_answer(&lists.answers, settings, &mut StdRng::seed_from_u64(99)).unwrap();
    let script = format!("xyz\n{}\nno\n", answer.word().text());

    let mut out = Vec::new();
    let stats = play_simple(
        script.as_bytes(),
        &mut out,
        &lists,
        settings,
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Your input word is too short!"));
    assert!(out.contains("Solved in 1 guess!"));
    assert_eq!(stats.games_won, 1);
}
