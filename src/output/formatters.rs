//! Formatting utilities for terminal output

use crate::core::{GuessRow, LetterBoard, LetterResult};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile like " A "
#[must_use]
pub fn letter_tile(letter: char, result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Correct => tile.black().on_green().bold(),
        LetterResult::Present => tile.black().on_yellow().bold(),
        LetterResult::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess row as five colored tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.letters()
        .map(|(letter, result)| letter_tile(letter, result).to_string())
        .collect()
}

/// Render the used letters, alphabetically, colored by best-known status
#[must_use]
pub fn used_letters(board: &LetterBoard) -> String {
    board
        .used()
        .map(|(letter, result)| {
            let upper = letter.to_ascii_uppercase().to_string();
            match result {
                LetterResult::Correct => upper.green().bold().to_string(),
                LetterResult::Present => upper.yellow().bold().to_string(),
                LetterResult::Absent => upper.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn row(answer: &str, guess: &str) -> GuessRow {
        evaluate(&Word::new(answer).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn colored_row_contains_uppercase_letters_in_order() {
        colored::control::set_override(false);
        let rendered = colored_row(&row("pride", "grace"));
        assert_eq!(rendered, " G  R  A  C  E ");
    }

    #[test]
    fn used_letters_are_alphabetical() {
        colored::control::set_override(false);
        let mut board = LetterBoard::new();
        board.record(&row("pride", "grace"));
        assert_eq!(used_letters(&board), "A C E G R");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
