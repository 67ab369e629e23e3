//! Wordle Game - CLI
//!
//! Word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::{analyze_guess, check_guess, run_simple},
    game::{Difficulty, GameSettings},
    output::{print_analysis_result, print_check_result},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty preset: easy (4 letters), normal (5), hard (6)
    #[arg(short, long, global = true, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Override the word length of the preset
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Override the number of attempts per round
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Wordlist: 'builtin' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible answers
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback a guess gets against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to compare against
        answer: String,
    },

    /// Analyze how well a guess splits the answer pool
    Analyze {
        /// Word to analyze
        word: String,
    },
}

/// Load wordlists based on the -w flag
///
/// - "builtin": embedded dictionary and answer pool
/// - "<path>": the file is both dictionary and answer pool
fn load_wordlists(wordlist_mode: &str) -> Result<WordLists> {
    match wordlist_mode {
        "builtin" => Ok(WordLists::builtin()),
        path => WordLists::from_file(path)
            .with_context(|| format!("failed to load wordlist from {path}")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let lists = load_wordlists(&cli.wordlist)?;
    info!(
        "loaded {} dictionary words, {} answers",
        lists.dictionary.len(),
        lists.answers.len()
    );

    let settings = GameSettings::resolve(cli.difficulty, cli.length, cli.attempts)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&lists, settings, cli.seed),
        Commands::Simple => {
            run_simple(&lists, settings, &mut make_rng(cli.seed))?;
            Ok(())
        }
        Commands::Check { guess, answer } => {
            let result = check_guess(&guess, &answer)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_guess(&word, &lists.dictionary, &lists.answers)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(lists: &WordLists, settings: GameSettings, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(lists, settings, make_rng(seed))?;
    run_tui(app)
}
