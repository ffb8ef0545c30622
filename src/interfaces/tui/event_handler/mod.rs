//! Event handling for TUI
//!
//! Handles keyboard and paste events and delegates to the current screen
//!
//! This module is organized by screen type:
//! - auth_screens: Login, NotFound
//! - dashboard_screen: Dashboard (and its custom date range editor)
//! - entity_screens: Trackers, Campaigns, Targets, Sites
//! - channel_screen: Channels (create form with tags, batch import)
//! - token_screens: Tokens, TokenGenerator

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, Overlay};
use crate::interfaces::tui::input_handler::paste_single_line;
use crate::router::{Route, nav_item_for_shortcut};

mod auth_screens;
mod channel_screen;
mod dashboard_screen;
mod entity_screens;
mod token_screens;

use auth_screens::*;
use channel_screen::*;
use dashboard_screen::*;
use entity_screens::*;
use token_screens::*;

/// Handle a key press. Returns `true` when the application should exit.
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.overlay {
        Overlay::Exiting => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.overlay = Overlay::None
                }
                _ => {}
            }
            return false;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                app.overlay = Overlay::None;
            }
            return false;
        }
        Overlay::None => {}
    }

    if !app.is_text_input() && handle_global_key(app, &key) {
        return false;
    }

    match app.route {
        Route::Login => handle_login_screen(app, key).await,
        Route::Dashboard => handle_dashboard_screen(app, key),
        Route::Trackers => handle_trackers_screen(app, key).await,
        Route::Campaigns => handle_campaigns_screen(app, key).await,
        Route::Channels => handle_channels_screen(app, key).await,
        Route::Targets => handle_targets_screen(app, key).await,
        Route::Sites => handle_sites_screen(app, key).await,
        Route::Tokens => handle_tokens_screen(app, key).await,
        Route::TokenGenerator => handle_generator_screen(app, key).await,
        Route::NotFound => handle_not_found_screen(app, key),
    }

    // 提交可能触发了跳转（登录成功、会话过期）
    app.sync_route();
    false
}

/// Keys that work on every screen outside of text input
fn handle_global_key(app: &mut App, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.overlay = Overlay::Exiting,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('L') if app.route.is_protected() => {
            app.ctx().logout();
            app.sync_route();
        }
        KeyCode::Char(c) if app.route.is_protected() => match nav_item_for_shortcut(c) {
            Some(item) => app.navigate(item.route),
            None => return false,
        },
        _ => return false,
    }
    true
}

/// Shared list movement. Returns whether the key was consumed.
pub(super) fn list_navigation(app: &mut App, key: &KeyEvent, len: usize) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_row(-1, len),
        KeyCode::Down | KeyCode::Char('j') => app.move_row(1, len),
        KeyCode::PageUp => app.move_row(-10, len),
        KeyCode::PageDown => app.move_row(10, len),
        KeyCode::Home => app.row = 0,
        KeyCode::End => app.move_row(isize::MAX / 2, len),
        _ => return false,
    }
    true
}

/// Insert pasted text into the focused text field, if any
pub fn handle_paste(app: &mut App, text: &str) {
    if app.is_channel_import() {
        app.channels.import_json.push_str(text);
        return;
    }

    let buffer = match app.route {
        Route::Login => login_text(app),
        Route::Dashboard => range_text(app),
        Route::Trackers => tracker_text(app),
        Route::Campaigns => campaign_text(app),
        Route::Channels => channel_text(app),
        Route::Targets => target_text(app),
        Route::Sites => site_text(app),
        _ => None,
    };
    if let Some(buffer) = buffer {
        paste_single_line(buffer, text);
    }
}
