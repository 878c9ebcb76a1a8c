//! TUI application state and logic

use crate::core::{WORD_LENGTH, WordError};
use crate::game::{GameSession, GameStatus, Identity, Submission};
use crate::select::select_daily;
use crate::store::{DailyStats, GameRecord, LeaderboardEntry, ResultStore};
use crate::themes::Theme;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// End-of-day summary shown once the game is over
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub stats: DailyStats,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub streak: (u32, u32),
}

/// Application state
pub struct App<'a> {
    pub store: &'a mut dyn ResultStore,
    pub theme_id: String,
    pub theme_name: String,
    pub date_key: String,
    pub identity: Identity,
    pub session: GameSession,
    pub input: String,
    pub messages: Vec<Message>,
    pub summary: Option<DaySummary>,
    pub already_played: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Set up the day's game: pick the target, record it, and restore a
    /// previously finished session if the user already played
    ///
    /// # Errors
    /// Returns an error if the theme has no words or a stored game fails to
    /// replay. Store read/write failures downgrade to warning messages.
    pub fn new(
        store: &'a mut dyn ResultStore,
        theme: &Theme,
        date: NaiveDate,
        identity: Identity,
    ) -> Result<Self> {
        let date_key = date.format("%Y-%m-%d").to_string();
        let target = select_daily(&date_key, theme.words())
            .ok_or_else(|| anyhow::anyhow!("Theme '{}' has no words", theme.id()))?
            .clone();

        let mut app = Self {
            store,
            theme_id: theme.id().to_string(),
            theme_name: theme.name().to_string(),
            date_key,
            identity,
            session: GameSession::new(target.clone()),
            input: String::new(),
            messages: Vec::new(),
            summary: None,
            already_played: false,
            should_quit: false,
        };

        if let Err(e) = app
            .store
            .ensure_daily(&app.date_key, &app.theme_id, target.text())
        {
            app.add_message(&format!("Store warning: {e}"), MessageStyle::Error);
        }

        let prior = match app
            .store
            .prior_result(&app.date_key, &app.theme_id, app.identity.user_id())
        {
            Ok(prior) => prior,
            Err(e) => {
                app.add_message(&format!("Store warning: {e}"), MessageStyle::Error);
                None
            }
        };

        if let Some(record) = prior {
            app.session = GameSession::restore(target, &record.guesses)?;
            app.already_played = true;
            app.add_message("You already played today.", MessageStyle::Info);
            app.load_summary();
        } else {
            app.add_message(
                &format!("Guess the {}-letter word. Type and press Enter.", WORD_LENGTH),
                MessageStyle::Info,
            );
        }

        Ok(app)
    }

    /// Append a letter to the pending guess
    pub fn push_letter(&mut self, c: char) {
        if self.session.status().is_terminal() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input.len() < WORD_LENGTH {
            self.input.push(c.to_ascii_uppercase());
        }
    }

    /// Remove the last pending letter
    pub fn pop_letter(&mut self) {
        self.input.pop();
    }

    /// Submit the pending guess
    pub fn submit_current(&mut self) {
        if self.session.status().is_terminal() {
            return;
        }

        let raw = self.input.clone();
        match self.session.submit(&raw) {
            Ok(Submission::Accepted(_)) => {
                self.input.clear();
                if self.session.status().is_terminal() {
                    self.finish_game();
                }
            }
            Ok(Submission::Ignored) => {}
            Err(WordError::InvalidLength(_)) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(WordError::NonAscii | WordError::InvalidCharacters) => {
                self.input.clear();
                self.add_message("Letters only", MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                let count = self.session.guess_count();
                let celebration = match count {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let reveal = format!("Out of guesses - it was {}.", self.session.target());
                self.add_message(&reveal, MessageStyle::Error);
            }
            GameStatus::InProgress => return,
        }

        // Local outcome is already final; recording it is best-effort
        let record = GameRecord {
            date: self.date_key.clone(),
            theme: self.theme_id.clone(),
            user_id: self.identity.user_id().to_string(),
            username: self.identity.username().to_string(),
            guesses: self.session.guess_texts(),
            won: self.session.won(),
            completed_at: now_millis(),
        };
        if let Err(e) = self.store.submit_result(record) {
            self.add_message(&format!("Result not saved: {e}"), MessageStyle::Error);
        }

        self.load_summary();
        self.add_message("Press 'q' or Esc to quit.", MessageStyle::Info);
    }

    fn load_summary(&mut self) {
        let stats = self
            .store
            .stats(&self.date_key, &self.theme_id)
            .unwrap_or_default();
        let leaderboard = self
            .store
            .leaderboard(&self.date_key, &self.theme_id, 5)
            .unwrap_or_default();
        let streak = self
            .store
            .streak(self.identity.user_id())
            .ok()
            .and_then(|s| {
                let today = NaiveDate::parse_from_str(&self.date_key, "%Y-%m-%d").ok()?;
                Some(s.effective(today))
            })
            .unwrap_or((0, 0));

        self.summary = Some(DaySummary {
            stats,
            leaderboard,
            streak,
        });
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// True once the game has ended (won, lost, or restored)
    #[must_use]
    pub fn finished(&self) -> bool {
        self.session.status().is_terminal()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                // 'q' only quits once typing letters no longer matters
                KeyCode::Char('q' | 'Q') if app.finished() => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.push_letter(c);
                }
                KeyCode::Backspace => {
                    app.pop_letter();
                }
                KeyCode::Enter => {
                    app.submit_current();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
