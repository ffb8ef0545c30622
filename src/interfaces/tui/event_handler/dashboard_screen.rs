//! Event handlers for the dashboard
//!
//! Scope filters cycle with their letter (shift for backwards); every change
//! refetches both stats in the background.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::analytics::{Period, today_utc};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::input_handler::edit_text;

const RANGE_FIELDS: usize = 2;

pub fn range_text(app: &mut App) -> Option<&mut String> {
    if !app.editing_range {
        return None;
    }
    match app.focus.index() {
        0 => Some(&mut app.dashboard.custom.start),
        _ => Some(&mut app.dashboard.custom.end),
    }
}

pub fn handle_dashboard_screen(app: &mut App, key: KeyEvent) {
    if app.editing_range {
        handle_range_editor(app, key);
        return;
    }

    let task = match key.code {
        KeyCode::Char('p') => Some(app.dashboard.cycle_period()),
        KeyCode::Char('t') => Some(app.dashboard.cycle_tracker(true)),
        KeyCode::Char('T') => Some(app.dashboard.cycle_tracker(false)),
        KeyCode::Char('c') => Some(app.dashboard.cycle_campaign(true)),
        KeyCode::Char('C') => Some(app.dashboard.cycle_campaign(false)),
        KeyCode::Char('n') => Some(app.dashboard.cycle_channel(true)),
        KeyCode::Char('N') => Some(app.dashboard.cycle_channel(false)),
        KeyCode::Char('s') => Some(app.dashboard.cycle_site(true)),
        KeyCode::Char('S') => Some(app.dashboard.cycle_site(false)),
        KeyCode::Char('r') => Some(app.dashboard.load()),
        KeyCode::Char('m') => {
            app.dashboard.cycle_trend_mode();
            None
        }
        KeyCode::Char('e') if app.dashboard.period() == Period::Custom => {
            app.editing_range = true;
            app.focus.reset();
            None
        }
        _ => None,
    };
    if let Some(task) = task {
        app.spawn(task);
    }
}

fn handle_range_editor(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus.next(RANGE_FIELDS),
        KeyCode::BackTab | KeyCode::Up => app.focus.prev(RANGE_FIELDS),
        KeyCode::Esc => app.editing_range = false,
        KeyCode::Enter => {
            // 无效范围时 refresh 会提示并保持编辑状态
            if app.dashboard.range_on(today_utc()).is_some() {
                app.editing_range = false;
            }
            let task = app.dashboard.refresh();
            app.spawn(task);
        }
        _ => {
            if let Some(buffer) = range_text(app) {
                edit_text(buffer, &key);
            }
        }
    }
}
