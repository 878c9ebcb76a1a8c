//! TUI rendering with ratatui
//!
//! Board, keyboard and summary panels for the daily game.

use super::app::{App, MessageStyle};
use crate::core::{LetterOutcome, MAX_GUESSES, WORD_LENGTH};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - board left, feedback right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🎯 DAILY WORDLE - {} - {}", app.theme_name, app.date_key);
    let header = Paragraph::new(title)
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn outcome_style(outcome: LetterOutcome) -> Style {
    match outcome {
        LetterOutcome::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterOutcome::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterOutcome::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let results = app.session.results();
    let current_row = results.len();
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        let mut spans = vec![Span::raw(" ")];

        if let Some(result) = results.get(row) {
            for (letter, outcome) in result.iter() {
                spans.push(Span::styled(
                    format!(" {} ", letter as char),
                    outcome_style(outcome),
                ));
                spans.push(Span::raw(" "));
            }
        } else if row == current_row && !app.finished() {
            // Pending input row
            for i in 0..WORD_LENGTH {
                let cell = app
                    .input
                    .as_bytes()
                    .get(i)
                    .map_or("   ".to_string(), |&b| format!(" {} ", b as char));
                spans.push(Span::styled(
                    cell,
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.keyboard();
    let mut lines = Vec::with_capacity(KEY_ROWS.len());

    for row in KEY_ROWS {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for letter in row.bytes() {
            let style = match hints.hint(letter) {
                Some(outcome) => outcome_style(outcome),
                None => Style::default().fg(Color::White),
            };
            spans.push(Span::styled(format!("{}", letter as char), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_summary(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
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

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.summary else {
        let help = Paragraph::new(vec![
            Line::from("Today's stats and leaderboard"),
            Line::from("appear when the game ends."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" Today ").borders(Borders::ALL));
        f.render_widget(help, area);
        return;
    };

    let stats = &summary.stats;
    let mut lines = vec![
        Line::from(format!(
            "Games: {}   Wins: {} ({}%)",
            stats.total_games,
            stats.total_wins,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {} current / {} best",
            summary.streak.0, summary.streak.1
        )),
        Line::from(""),
    ];

    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let width = (count * 12 / max) as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("▇".repeat(width.max(usize::from(count > 0))), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if !summary.leaderboard.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Leaderboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in &summary.leaderboard {
            let style = if entry.username == app.identity.username() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "#{} {} - {}/{MAX_GUESSES}",
                    entry.rank, entry.username, entry.guesses
                ),
                style,
            )));
        }
    }

    let summary_widget = Paragraph::new(lines)
        .block(Block::default().title(" Today ").borders(Borders::ALL));
    f.render_widget(summary_widget, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.status() {
        GameStatus::Won => (
            " 🎉 SOLVED! | Press 'q' or Esc to quit ",
            String::new(),
            Color::Green,
        ),
        GameStatus::Lost => (
            " Better luck tomorrow | Press 'q' or Esc to quit ",
            format!("The word was {}", app.session.target()),
            Color::Red,
        ),
        GameStatus::InProgress => (
            " Type your guess and press Enter ",
            app.input.clone(),
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
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.identity.username()))
        .alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let progress = format!(
        "Guess {}/{MAX_GUESSES}",
        (app.session.guess_count() + usize::from(!app.finished())).min(MAX_GUESSES)
    );
    let guesses = Paragraph::new(progress).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help_text = if app.finished() {
        "q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
