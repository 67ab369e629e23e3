//! TUI rendering with ratatui
//!
//! Draws the guess grid, the keyboard, the input field and the feedback
//! messages.

use super::app::{App, MessageStyle};
use crate::core::LetterResult;
use crate::game::{KEYBOARD_ROWS, RoundState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input field
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile style for a letter result; `None` is an unscored tile
#[must_use]
pub fn tile_style(result: Option<LetterResult>) -> Style {
    match result {
        Some(LetterResult::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterResult::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterResult::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, result: Option<LetterResult>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(result),
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One line per attempt: scored rows, then the row being typed, then blanks
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let round = &app.round;
    let settings = round.settings();
    let mut lines = Vec::with_capacity(settings.max_attempts() * 2);

    for index in 0..settings.max_attempts() {
        let spans: Vec<Span> = if let Some(row) = round.rows().get(index) {
            row.guess
                .letters()
                .iter()
                .zip(row.feedback.results())
                .flat_map(|(&letter, &result)| [tile(char::from(letter), Some(result)), Span::raw(" ")])
                .collect()
        } else if index == round.rows().len() && round.state().accepts_input() {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..settings.word_length())
                .flat_map(|i| {
                    let letter = typed.get(i).copied().unwrap_or('·');
                    [
                        Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect()
        } else {
            (0..settings.word_length())
                .flat_map(|_| [tile('·', None), Span::raw(" ")])
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.round.hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .flat_map(|row| {
            let keys: Vec<Span> = row
                .bytes()
                .map(|letter| tile(char::from(letter), hints.get(letter)))
                .collect();
            [Line::from(keys), Line::from("")]
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.settings.word_length();
    let (title, content, color) = match app.round.state() {
        RoundState::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        RoundState::Lost => (
            " Round over | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Red,
        ),
        _ => (
            format!(" Please enter a {word_length}-letter word | Enter: Submit "),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round = &app.round;
    let attempts_text = format!(
        "Attempt: {}/{}",
        (round.attempts_used() + 1).min(round.settings().max_attempts()),
        round.settings().max_attempts()
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!(
        "Streak: {} (max {})",
        app.stats.current_streak, app.stats.max_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if round.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl-N: New Game | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
