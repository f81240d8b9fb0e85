//! TUI rendering with ratatui
//!
//! Board, used letters, stats and messages for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterBoard, LetterResult, WORD_LENGTH};
use crate::game::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<W, S>(f: &mut Frame, app: &App<W, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
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

fn result_style(result: LetterResult) -> Style {
    let bg = match result {
        LetterResult::Correct => Color::Green,
        LetterResult::Present => Color::Yellow,
        LetterResult::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let session = app.game.session();
    let empty = Style::new().fg(Color::DarkGray);
    let mut lines = vec![Line::from("")];

    for row_index in 0..session.max_tries() {
        let spans: Vec<Span> = if let Some(row) = session.rows().get(row_index) {
            row.letters()
                .flat_map(|(letter, result)| tile(letter, result_style(result)))
                .collect()
        } else if row_index == session.rows().len() && !session.status().is_terminal() {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| {
                    typed.get(i).map_or_else(
                        || tile('·', empty),
                        |&c| tile(c, Style::new().fg(Color::White).add_modifier(Modifier::BOLD)),
                    )
                })
                .collect()
        } else {
            (0..WORD_LENGTH).flat_map(|_| tile('·', empty)).collect()
        };

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Tries gauge
            Constraint::Length(4), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app.game.session().letters(), chunks[0]);
    render_tries(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_keyboard(f: &mut Frame, letters: &LetterBoard, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let style = letters
                        .status(c)
                        .map_or_else(|| Style::new().fg(Color::White), result_style);
                    [
                        Span::styled(c.to_ascii_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_tries<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let session = app.game.session();
    let used = session.rows().len();
    let max = session.max_tries();
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_stats<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let summary = app.game.stats().summary();
    let lines = vec![
        Line::from(summary.to_string()),
        Line::from(format!(
            "Scoring: {}",
            match app.game.mode() {
                crate::core::EvaluationMode::Membership => "classic",
                crate::core::EvaluationMode::DuplicateAware => "duplicate-aware",
            }
        )),
    ];

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(stats, area);
}

fn render_messages<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
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

fn render_input<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a 5-letter word | Enter to submit | Esc to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
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

fn render_status<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let status = match app.game.session().status() {
        SessionStatus::InProgress => format!(
            "Guess {}/{}",
            app.game.session().current_row() + 1,
            app.game.session().max_tries()
        ),
        other => format!("Game {other}"),
    };

    let help = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
