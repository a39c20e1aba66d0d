//! Terminal output formatting
//!
//! Pure display tokens plus the single boundary that writes them.

pub mod display;
pub mod formatters;

pub use display::{ConsoleRenderer, Renderer};
pub use formatters::{Tile, Tint, feedback_to_emoji, share_grid, tiles, tint, win_message};
