//! Wordle Game - CLI
//!
//! Play in a TUI (default) or a plain line-based mode, inspect your score
//! history, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_game::{
    commands::{check_guess, run_simple, stats_report},
    config::GameConfig,
    game::Game,
    output::{print_check_result, print_stats_report},
    source::SourceKind,
    stats::{JsonFileStore, StatsStore},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use the built-in word list only; never contact the word services
    #[arg(long, global = true)]
    offline: bool,

    /// Score repeated letters with standard Wordle counting
    #[arg(long, global = true)]
    duplicate_aware: bool,

    /// Score history file (default: <data_dir>/wordle_game/wordleScores.json)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Newline-separated word list used to validate guesses offline
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Config file (default: <config_dir>/wordle_game/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show your score history
    Stats,

    /// Score a guess against a known answer
    Check {
        /// The hidden word
        answer: String,

        /// The guessed word
        guess: String,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::load(self.config.as_deref());
        config.offline |= self.offline;
        config.duplicate_aware |= self.duplicate_aware;
        if let Some(path) = &self.stats_file {
            config.stats_file = Some(path.clone());
        }
        if let Some(path) = &self.dictionary {
            config.dictionary_file = Some(path.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    init_tracing(matches!(command, Commands::Play));

    let config = cli.game_config();
    tracing::debug!(?config, "Configuration loaded");

    match command {
        Commands::Play => run_play_command(&config).await,
        Commands::Simple => run_simple_command(&config).await,
        Commands::Stats => {
            run_stats_command(&config);
            Ok(())
        }
        Commands::Check { answer, guess } => run_check_command(&config, answer, guess),
    }
}

/// Install the global subscriber
///
/// The TUI owns the terminal, so it logs to a file; line mode logs to stderr.
fn init_tracing(tui: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if !tui {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
        return;
    }

    if let Some(file) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        return;
    }

    // No log file: stay silent rather than draw over the TUI
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<fs::File> {
    let dir = dirs::data_dir()?.join("wordle_game");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("wordle_game.log"))
        .ok()
}

async fn start_game(config: &GameConfig) -> Result<Game<SourceKind, JsonFileStore>> {
    let source = config
        .word_source()
        .context("Failed to set up the word source")?;
    tracing::info!(online = source.is_online(), "Word source ready");
    let stats = StatsStore::open(config.stats_store());
    Ok(Game::start(source, stats, config.evaluation_mode()).await)
}

async fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let game = start_game(config).await?;
    run_tui(App::new(game)).await
}

async fn run_simple_command(config: &GameConfig) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Picking a word...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let game = start_game(config).await;
    spinner.finish_and_clear();

    run_simple(&mut game?).await
}

fn run_stats_command(config: &GameConfig) {
    let store = config.stats_store();
    tracing::debug!(path = %store.path().display(), "Reading score history");
    let stats = StatsStore::open(store);
    print_stats_report(&stats_report(&stats));
}

fn run_check_command(config: &GameConfig, answer: &str, guess: &str) -> Result<()> {
    let row = check_guess(answer, guess, config.evaluation_mode()).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&row);
    Ok(())
}
