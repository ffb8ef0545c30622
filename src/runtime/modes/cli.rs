//! CLI mode
//!
//! Delegates a parsed subcommand to the CLI implementation.

use std::sync::Arc;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;

/// Run CLI mode
pub async fn run_cli(ctx: Arc<AppContext>, command: Commands) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(ctx, command).await
}
