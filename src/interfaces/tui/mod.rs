//! Terminal User Interface (TUI) module
//!
//! Interactive admin console: sidebar navigation over the tracking entities,
//! the analytics dashboard and the token generator.

use std::io;
use std::sync::Arc;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

use crate::context::AppContext;

mod app;
pub mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(ctx: Arc<AppContext>) -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let tick_rate = ctx.config().ui.tick_rate();
    let mut app = App::new(ctx);
    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    info!("TUI stopped");

    res.map_err(Into::into)
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: std::time::Duration,
) -> io::Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // 轮询期间后台任务继续运行，超时即进入下一帧
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event_handler::handle_key_event(app, key).await {
                        return Ok(());
                    }
                }
                Event::Paste(text) => event_handler::handle_paste(app, &text),
                _ => {}
            }
        }

        app.on_tick();
        tokio::task::yield_now().await;
    }
}
