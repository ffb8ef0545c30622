//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use std::sync::Arc;

use crate::context::AppContext;

/// Run TUI mode
pub async fn run_tui(ctx: Arc<AppContext>) -> color_eyre::Result<()> {
    crate::interfaces::tui::run_tui(ctx).await
}
