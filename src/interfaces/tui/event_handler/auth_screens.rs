//! Event handlers for the login and not-found screens

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::input_handler::edit_text;

const LOGIN_FIELDS: usize = 2;

pub fn login_text(app: &mut App) -> Option<&mut String> {
    match app.focus.index() {
        0 => Some(&mut app.login.username),
        _ => Some(&mut app.login.password),
    }
}

/// Handle login screen input
pub async fn handle_login_screen(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus.next(LOGIN_FIELDS),
        KeyCode::BackTab | KeyCode::Up => app.focus.prev(LOGIN_FIELDS),
        KeyCode::Enter if app.focus.is(0) => app.focus.next(LOGIN_FIELDS),
        KeyCode::Enter => {
            if app.login.is_loading() {
                return;
            }
            if app.login.submit().await {
                app.sync_route();
            }
        }
        _ => {
            if let Some(buffer) = login_text(app) {
                edit_text(buffer, &key);
            }
        }
    }
}

/// Handle not-found screen input
pub fn handle_not_found_screen(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char('h') | KeyCode::Esc) {
        app.not_found.go_home();
        app.sync_route();
    }
}
