//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one-shot subcommands)
//! - TUI mode (Terminal UI, the default)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run
///
/// # Mode Detection Logic
/// 1. No subcommand or `tui`, with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn mode_of(argv: &[&str]) -> Mode {
        let cli = Cli::try_parse_from(argv).unwrap();
        detect_mode(cli.command.as_ref())
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_no_args_is_tui() {
        assert_eq!(mode_of(&["tracklink-admin"]), Mode::Tui);
        assert_eq!(mode_of(&["tracklink-admin", "tui"]), Mode::Tui);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_subcommand_is_cli() {
        assert_eq!(mode_of(&["tracklink-admin", "status"]), Mode::Cli);
        assert_eq!(mode_of(&["tracklink-admin", "trackers", "list"]), Mode::Cli);
    }
}
