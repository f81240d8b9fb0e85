//! Display functions for game and command results

use super::formatters::{colored_row, create_progress_bar, used_letters};
use crate::commands::StatsReport;
use crate::core::GuessRow;
use crate::game::{GameSession, GuessReport, SessionStatus};
use crate::stats::StatsSummary;
use colored::Colorize;

/// Print the board so far and the used letters
pub fn print_board(session: &GameSession) {
    println!();
    for (i, row) in session.rows().iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), colored_row(row));
    }
    let used = used_letters(session.letters());
    if !used.is_empty() {
        println!("\n  Used: {used}");
    }
    println!();
}

/// Print the outcome of an accepted guess
pub fn print_guess_report(report: &GuessReport, session: &GameSession) {
    match report.status {
        SessionStatus::Won { guesses_used } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "  {}",
                format!(
                    "🎉 You win in {guesses_used} {}!",
                    if guesses_used == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            if let Some(summary) = report.summary {
                println!("  📊 {summary}");
            }
            println!("{}", "═".repeat(60).bright_cyan());
        }
        SessionStatus::Lost => {
            let answer = session
                .revealed_answer()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            println!(
                "\n  {}",
                format!("💀 Game over! The word was: {answer}").red().bold()
            );
        }
        SessionStatus::InProgress => {
            println!(
                "  Tries left: [{}] {}",
                create_progress_bar(
                    session.remaining_tries() as f64,
                    session.max_tries() as f64,
                    session.max_tries()
                ),
                session.remaining_tries()
            );
        }
    }

    if let Some(warning) = &report.stats_warning {
        println!("  {} {warning}", "warning:".yellow().bold());
    }
}

/// Print a single evaluated row
pub fn print_check_result(row: &GuessRow) {
    println!("\n  {}  {}", colored_row(row), row.to_emoji());
    if row.is_solved() {
        println!("  {}", "Exact match".green().bold());
    }
}

/// Print the running average line
pub fn print_summary(summary: &StatsSummary) {
    println!("📊 {summary}");
}

/// Print the stats report with a guess distribution
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORE HISTORY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    print_summary(&report.summary);

    if report.summary.games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in &report.distribution {
        let pct = (count as f64 / report.summary.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
