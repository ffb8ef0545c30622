//! Event handlers for the channels screen
//!
//! The create form has five fixed fields followed by a key/value pair per
//! tag row. Ctrl+N adds a tag row, Ctrl+D removes the focused one.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::list_navigation;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::input_handler::{edit_text, select_step};
use crate::pages::ChannelModal;

const FIXED_FIELDS: usize = 5;

pub fn channel_field_count(app: &App) -> usize {
    FIXED_FIELDS + app.channels.form.tags.len() * 2
}

/// Tag row and column (0 key, 1 value) of a field index
fn tag_slot(field: usize) -> Option<(usize, usize)> {
    field
        .checked_sub(FIXED_FIELDS)
        .map(|offset| (offset / 2, offset % 2))
}

pub fn channel_text(app: &mut App) -> Option<&mut String> {
    match app.channels.modal()? {
        ChannelModal::Import => Some(&mut app.channels.import_json),
        ChannelModal::Create => {
            let field = app.focus.index();
            let form = &mut app.channels.form;
            match field {
                2 => Some(&mut form.name),
                3 => Some(&mut form.source),
                4 => Some(&mut form.medium),
                _ => {
                    let (row, column) = tag_slot(field)?;
                    let tag = form.tags.get_mut(row)?;
                    Some(if column == 0 { &mut tag.key } else { &mut tag.value })
                }
            }
        }
    }
}

pub async fn handle_channels_screen(app: &mut App, key: KeyEvent) {
    match app.channels.modal() {
        Some(ChannelModal::Create) => handle_create_modal(app, key).await,
        Some(ChannelModal::Import) => handle_import_modal(app, key).await,
        None => handle_list(app, key),
    }
}

fn handle_list(app: &mut App, key: KeyEvent) {
    let len = app.channels.channels().len();
    if list_navigation(app, &key, len) {
        return;
    }
    let task = match key.code {
        KeyCode::Char('a') => {
            app.channels.open_create();
            app.focus.reset();
            None
        }
        KeyCode::Char('i') => {
            app.channels.open_import();
            None
        }
        KeyCode::Char('f') => Some(app.channels.cycle_filter_tracker(true)),
        KeyCode::Char('F') => Some(app.channels.cycle_filter_tracker(false)),
        KeyCode::Char('g') => Some(app.channels.cycle_filter_campaign(true)),
        KeyCode::Char('G') => Some(app.channels.cycle_filter_campaign(false)),
        KeyCode::Char('r') => Some(app.channels.load()),
        _ => None,
    };
    if let Some(task) = task {
        app.row = 0;
        app.spawn(task);
    }
}

async fn handle_create_modal(app: &mut App, key: KeyEvent) {
    let count = channel_field_count(app);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus.next(count),
        KeyCode::BackTab | KeyCode::Up => app.focus.prev(count),
        KeyCode::Esc => app.channels.close_modal(),
        KeyCode::Enter => {
            if !app.channels.is_creating() && app.channels.submit_create().await {
                app.focus.reset();
            }
        }
        KeyCode::Char('n') if ctrl => {
            app.channels.form.add_tag_row();
            app.focus.set(channel_field_count(app) - 2);
        }
        KeyCode::Char('d') if ctrl => {
            if let Some((row, _)) = tag_slot(app.focus.index()) {
                app.channels.form.remove_tag_row(row);
                app.focus.clamp(channel_field_count(app));
            }
        }
        _ if app.focus.is(0) => {
            if let Some(forward) = select_step(&key) {
                let task = app.channels.cycle_form_tracker(forward);
                app.spawn(task);
            }
        }
        _ if app.focus.is(1) => {
            if let Some(forward) = select_step(&key) {
                app.channels.cycle_form_campaign(forward);
            }
        }
        _ => {
            if let Some(buffer) = channel_text(app) {
                edit_text(buffer, &key);
            }
        }
    }
}

async fn handle_import_modal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.channels.close_modal(),
        KeyCode::Enter => {
            if !app.channels.is_importing() {
                app.channels.submit_import().await;
            }
        }
        _ => {
            edit_text(&mut app.channels.import_json, &key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_slot() {
        assert_eq!(tag_slot(4), None);
        assert_eq!(tag_slot(5), Some((0, 0)));
        assert_eq!(tag_slot(6), Some((0, 1)));
        assert_eq!(tag_slot(9), Some((2, 0)));
    }
}
