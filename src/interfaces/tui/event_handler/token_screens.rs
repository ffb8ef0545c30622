//! Event handlers for the token list and the token generator

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::list_navigation;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::input_handler::select_step;
use crate::router::Route;

/// Tracker, campaign, channel, target, mode
const GENERATOR_FIELDS: usize = 5;

pub async fn handle_tokens_screen(app: &mut App, key: KeyEvent) {
    if app.tokens.pending_delete().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if app.tokens.confirm_delete().await {
                    let len = app.tokens.tokens().len();
                    app.move_row(0, len);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.tokens.cancel_delete(),
            _ => {}
        }
        return;
    }

    let items = app.tokens.tokens();
    if list_navigation(app, &key, items.len()) {
        return;
    }
    let selected = items.get(app.row);
    match key.code {
        KeyCode::Char('y') => {
            if let Some(token) = selected {
                app.copy(&token.short_code, "Short code");
            }
        }
        KeyCode::Char('Y') => {
            if let Some(token) = selected {
                app.copy(&token.tracking_url, "Tracking URL");
            }
        }
        KeyCode::Char('d') => {
            if let Some(token) = selected {
                app.tokens.request_delete(token);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.tokens.open_generator();
            app.sync_route();
        }
        KeyCode::Char('r') => app.spawn(app.tokens.load()),
        _ => {}
    }
}

pub async fn handle_generator_screen(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus.next(GENERATOR_FIELDS),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus.prev(GENERATOR_FIELDS),
        KeyCode::Enter => {
            if !app.generator.is_generating() {
                app.generator.generate().await;
            }
        }
        KeyCode::Char('y') => {
            if let Some(code) = app.generator.generated().map(|t| t.short_code.clone()) {
                app.copy(&code, "Short code");
            }
        }
        KeyCode::Char('Y') => {
            if let Some(url) = app.generator.generated().map(|t| t.tracking_url.clone()) {
                app.copy(&url, "Tracking URL");
            }
        }
        KeyCode::Char('v') => {
            app.generator.view_all();
            app.sync_route();
        }
        KeyCode::Esc => app.navigate(Route::Tokens),
        _ => {
            let Some(forward) = select_step(&key) else {
                return;
            };
            let task = match app.focus.index() {
                0 => Some(app.generator.cycle_tracker(forward)),
                1 => Some(app.generator.cycle_campaign(forward)),
                2 => {
                    app.generator.cycle_channel(forward);
                    None
                }
                3 => {
                    app.generator.cycle_target(forward);
                    None
                }
                _ => {
                    app.generator.cycle_mode();
                    None
                }
            };
            if let Some(task) = task {
                app.spawn(task);
            }
        }
    }
}
