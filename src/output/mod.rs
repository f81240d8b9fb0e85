//! Terminal output formatting
//!
//! Display utilities for the line-mode game and CLI commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_guess_report, print_stats_report, print_summary,
};
