//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Game, GameError};
use crate::output::{print_board, print_guess_report, print_summary};
use crate::source::WordSource;
use crate::stats::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<W: WordSource, S: ScoreStore>(game: &mut Game<W, S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {} tries.", game.session().max_tries());
    println!("After each guess:\n");
    println!("  - {} letter is in the right spot", "green".green().bold());
    println!("  - {} letter is in the word, wrong spot", "yellow".yellow().bold());
    println!("  - {} letter is not in the word\n", "gray".bright_black());
    println!("Commands: 'quit' to exit, 'new' for new game, 'stat' for your average\n");
    print_summary(&game.stats().summary());
    if let Some(err) = game.stats().load_warning() {
        println!(
            "{} score history unreadable, starting fresh: {err}",
            "warning:".yellow().bold()
        );
    }
    println!();

    loop {
        let session = game.session();
        if session.status().is_terminal() {
            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    start_new_session(game).await;
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!(
            "Guess {}/{}",
            session.current_row() + 1,
            session.max_tries()
        );
        let input = get_user_input(&prompt)?;

        let guess = match classify_input(&input) {
            LineInput::Quit => break,
            LineInput::NewGame => {
                start_new_session(game).await;
                continue;
            }
            LineInput::ShowStats => {
                print_summary(&game.stats().summary());
                continue;
            }
            LineInput::Guess(guess) => guess,
        };

        match game.submit_guess(guess).await {
            Ok(report) => {
                print_board(game.session());
                print_guess_report(&report, game.session());
            }
            Err(GameError::Validation(err)) => {
                println!("❌ {err}\n");
            }
            Err(err @ GameError::SessionTerminated) => {
                println!("{err}\n");
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

async fn start_new_session<W: WordSource, S: ScoreStore>(game: &mut Game<W, S>) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Picking a word...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    game.new_session().await;

    spinner.finish_and_clear();
    println!("\n🔄 New game started!\n");
}

/// One line typed at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineInput<'a> {
    Quit,
    NewGame,
    ShowStats,
    Guess(&'a str),
}

/// Split command words from guesses
///
/// `stats` is a valid 5-letter word, so only `stat` shows the average.
fn classify_input(input: &str) -> LineInput<'_> {
    match input.trim().to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => LineInput::Quit,
        "new" | "n" => LineInput::NewGame,
        "stat" => LineInput::ShowStats,
        _ => LineInput::Guess(input),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
