//! User-facing interfaces: non-interactive CLI and the terminal UI

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
