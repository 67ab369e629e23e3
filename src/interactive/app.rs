//! TUI application state and logic

use crate::game::{GameSettings, Round, RoundState, Statistics, SubmitError, pick_answer};
use crate::wordlists::WordLists;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Extra characters the input field takes beyond the word length
const INPUT_SLACK: usize = 2;

/// Messages kept in the feedback area
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub lists: &'a WordLists,
    pub settings: GameSettings,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the answer pool has no word of the configured length.
    pub fn new(lists: &'a WordLists, settings: GameSettings, mut rng: StdRng) -> Result<Self> {
        let round = Round::new(pick_answer(&lists.answers, settings, &mut rng)?, settings)?;

        let mut app = Self {
            lists,
            settings,
            round,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Welcome! Guess the {}-letter word in {} attempts.",
                settings.word_length(),
                settings.max_attempts()
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Abandon or replace the current round with a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be picked.
    pub fn new_game(&mut self) -> Result<()> {
        let answer = pick_answer(&self.lists.answers, self.settings, &mut self.rng)?;
        self.round = Round::new(answer, self.settings)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Submit the input field
    pub fn submit(&mut self) {
        match self.round.submit(&self.input_buffer, &self.lists.dictionary) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.state {
                    RoundState::Won => {
                        self.stats.record(&self.round);
                        let celebration = match self.round.attempts_used() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            6 => "😅 PHEW! Got it in six! 😅",
                            _ => "🎊 SOLVED! 🎊",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    RoundState::Lost => {
                        self.stats.record(&self.round);
                        let answer = self.round.answer().word().text().to_uppercase();
                        self.add_message(
                            &format!("Out of attempts! The word was {answer}."),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    _ => {
                        let remaining = outcome.attempts_remaining;
                        self.add_message(
                            &format!(
                                "{remaining} {} left",
                                if remaining == 1 { "attempt" } else { "attempts" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            // Keep the text so the player can fix it
            Err(SubmitError::Invalid(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err) => debug!("submit ignored: {err}"),
        }
    }

    /// Dispatch one key press
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return Ok(());
        }

        if self.round.state().accepts_input() {
            match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game()?;
                }
                KeyCode::Char(c)
                    if c.is_ascii_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    if self.input_buffer.len() < self.input_capacity() {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            }
        } else {
            // Round over: input is disabled
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
        }

        Ok(())
    }

    /// Maximum length of the input field
    #[must_use]
    pub const fn input_capacity(&self) -> usize {
        self.settings.word_length() + INPUT_SLACK
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn lists() -> WordLists {
        let mut lists = WordLists::from_words(words_from_slice(&["slate"]));
        lists.dictionary = Dictionary::from_words(["slate", "crane", "plate"]);
        lists
    }

    fn app(lists: &WordLists, attempts: usize) -> App<'_> {
        App::new(
            lists,
            GameSettings::new(5, attempts).unwrap(),
            StdRng::seed_from_u64(3),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_input_up_to_capacity() {
        let lists = lists();
        let mut app = app(&lists, 6);

        for c in "abcdefghij".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "abcdefg");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "abcdef");

        // Non-letters are ignored
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input_buffer, "abcdef");
    }

    #[test]
    fn invalid_submit_keeps_input_and_shows_message() {
        let lists = lists();
        let mut app = app(&lists, 6);

        type_word(&mut app, "cra");
        assert_eq!(app.input_buffer, "cra");
        assert_eq!(app.round.attempts_used(), 0);

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Your input word is too short!");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn winning_disables_input() {
        let lists = lists();
        let mut app = app(&lists, 6);

        type_word(&mut app, "crane");
        assert_eq!(app.round.attempts_used(), 1);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "slate");
        assert_eq!(app.round.state(), RoundState::Won);
        assert_eq!(app.stats.games_won, 1);

        // Letters no longer reach the input field
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.round.state(), RoundState::AwaitingInput);
        assert!(app.round.rows().is_empty());
    }

    #[test]
    fn losing_reveals_answer() {
        let lists = lists();
        let mut app = app(&lists, 1);

        type_word(&mut app, "crane");
        assert_eq!(app.round.state(), RoundState::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The word was SLATE"))
        );

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits_mid_round() {
        let lists = lists();
        let mut app = app(&lists, 6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_n_restarts_mid_round() {
        let lists = lists();
        let mut app = app(&lists, 6);
        type_word(&mut app, "crane");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.round.rows().is_empty());
        assert_eq!(app.stats.games_played, 0);
    }

    #[test]
    fn messages_are_capped() {
        let lists = lists();
        let mut app = app(&lists, 6);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
