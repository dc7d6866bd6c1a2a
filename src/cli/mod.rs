//! Thin terminal glue around the engine: input parsing, board rendering,
//! and the interactive loop. No rules logic lives here.

pub mod app;
pub mod commands;
pub mod display;

pub use app::{parse_command, App, Command};
pub use commands::Cli;
pub use display::{display_board, display_captured, sorted_by_value, unicode_symbol};
