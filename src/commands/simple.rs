//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. One guess per line; `:new` abandons the
//! current round and `:quit` exits.

use crate::game::{
    GameSettings, PickError, Round, RoundError, RoundState, Statistics, SubmitError, pick_answer,
};
use crate::output::formatters::{colored_row, keyboard_lines};
use crate::wordlists::WordLists;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimpleError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pick(#[from] PickError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if no
/// answer of the configured length exists.
pub fn run_simple<G: Rng>(
    lists: &WordLists,
    settings: GameSettings,
    rng: &mut G,
) -> Result<Statistics, SimpleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_simple(stdin.lock(), stdout.lock(), lists, settings, rng)
}

/// Play rounds reading guesses from `input` until quit or end of input
///
/// # Errors
///
/// See [`run_simple`].
pub fn play_simple<R: BufRead, W: Write, G: Rng>(
    mut input: R,
    mut out: W,
    lists: &WordLists,
    settings: GameSettings,
    rng: &mut G,
) -> Result<Statistics, SimpleError> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                      Wordle - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Commands: ':new' for a new word, ':quit' to exit\n")?;

    let mut stats = Statistics::default();

    'games: loop {
        let answer = pick_answer(&lists.answers, settings, rng)?;
        let mut round = Round::new(answer, settings)?;

        writeln!(
            out,
            "Please enter a {}-letter word ({} attempts).",
            settings.word_length(),
            settings.max_attempts()
        )?;

        while !round.is_over() {
            let prompt = format!(
                "Guess {}/{}",
                round.attempts_used() + 1,
                settings.max_attempts()
            );
            let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
                return Ok(stats);
            };

            match line.as_str() {
                ":quit" | ":q" => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(stats);
                }
                ":new" | ":n" => {
                    writeln!(
                        out,
                        "Skipped. The word was {}.\n",
                        round.answer().word().text().to_uppercase().bold()
                    )?;
                    continue 'games;
                }
                _ => {}
            }

            match round.submit(&line, &lists.dictionary) {
                Ok(outcome) => {
                    writeln!(out, "  {}", colored_row(&outcome.row))?;
                }
                Err(SubmitError::Invalid(err)) => {
                    writeln!(out, "  {}", format!("❌ {err}").red())?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            if !round.is_over() {
                for key_row in keyboard_lines(round.hints()) {
                    writeln!(out, "  {key_row}")?;
                }
            }
        }

        stats.record(&round);
        print_round_summary(&mut out, &round, &stats)?;

        let Some(again) = read_line(&mut input, &mut out, "Play again? (yes/no)")? else {
            return Ok(stats);
        };
        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(stats);
        }
        writeln!(out, "\n🔄 New game started!\n")?;
    }
}

fn print_round_summary<W: Write>(
    out: &mut W,
    round: &Round,
    stats: &Statistics,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    if round.state() == RoundState::Won {
        let used = round.attempts_used();
        writeln!(
            out,
            "{}",
            format!(
                "  🎉 Solved in {used} {}!",
                if used == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            format!(
                "  ❌ Out of attempts. The word was {}.",
                round.answer().word().text().to_uppercase()
            )
            .red()
            .bold()
        )?;
    }

    writeln!(out)?;
    for row in round.rows() {
        writeln!(
            out,
            "    {} {}",
            row.guess.text().to_uppercase(),
            row.feedback.to_emoji()
        )?;
    }

    writeln!(
        out,
        "\n  Played: {} | Win rate: {:.0}% | Streak: {} (max {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
