//! Daily Wordle - CLI
//!
//! Daily themed word-guessing game with TUI and plain CLI modes, plus
//! reporting commands for stats, leaderboards and the selection schedule.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_daily::{
    commands::{preview_daily, run_audit, run_simple},
    game::Identity,
    output::{print_audit, print_leaderboard, print_preview, print_stats},
    store::{JsonStore, ResultStore},
    themes::Catalog,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily themed word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme: mlb (default), sports, foods, animals
    #[arg(short, long, global = true, default_value = "mlb")]
    theme: String,

    /// Day to play, YYYY-MM-DD (default: today)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Username for the leaderboard (default: anonymous guest)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Result store file
    #[arg(long, global = true, default_value = ".wordle_daily.json")]
    data_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show today's aggregate stats
    Stats,

    /// Show today's winner ranking
    Leaderboard {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show upcoming daily words for a theme
    Preview {
        /// Number of days to preview
        #[arg(short = 'n', long, default_value = "7")]
        days: u32,
    },

    /// Audit selection fairness over a date range
    Audit {
        /// Number of days to sweep
        #[arg(short = 'n', long, default_value = "365")]
        days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = Catalog::builtin().context("failed to load theme catalog")?;
    let theme = catalog.get(&cli.theme)?.clone();
    let date = resolve_date(cli.date.as_deref())?;
    let identity = resolve_identity(cli.user.as_deref());

    let mut store = JsonStore::open(&cli.data_file)
        .with_context(|| format!("failed to open store at {}", cli.data_file.display()))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&mut store, &theme, date, identity),
        Commands::Simple => {
            run_simple(&mut store, &theme, date, &identity).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let date_key = date.format("%Y-%m-%d").to_string();
            let stats = store.stats(&date_key, theme.id())?;
            print_stats(&date_key, theme.name(), &stats);
            Ok(())
        }
        Commands::Leaderboard { limit } => {
            let date_key = date.format("%Y-%m-%d").to_string();
            let board = store.leaderboard(&date_key, theme.id(), limit)?;
            print_leaderboard(&board, identity.username());
            Ok(())
        }
        Commands::Preview { days } => {
            let rows = preview_daily(&theme, date, days);
            print_preview(theme.name(), &rows);
            Ok(())
        }
        Commands::Audit { days } => {
            let report = run_audit(&theme, date, days);
            print_audit(&report);
            Ok(())
        }
    }
}

fn run_play_command(
    store: &mut dyn ResultStore,
    theme: &wordle_daily::themes::Theme,
    date: NaiveDate,
    identity: Identity,
) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(store, theme, date, identity)?;
    run_tui(app)
}

fn resolve_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}

fn resolve_identity(user: Option<&str>) -> Identity {
    match user {
        Some(name) if !name.trim().is_empty() => Identity::from_username(name),
        _ => Identity::guest(&mut rand::rng()),
    }
}
