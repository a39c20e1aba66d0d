//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckError, run_check};
pub use play::{GameSummary, run_play};
