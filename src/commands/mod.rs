//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::check_guess;
pub use simple::run_simple;
pub use stats::{StatsReport, stats_report};
