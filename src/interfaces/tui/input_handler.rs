//! Input handling utilities
//!
//! Shared key handling for text fields and select fields across screens

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply a key to a text buffer. Returns whether the key was consumed.
pub fn edit_text(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}

/// Direction requested on a focused select field, if any
pub fn select_step(key: &KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(true),
        KeyCode::Left => Some(false),
        _ => None,
    }
}

/// Pasted text is inserted into single-line fields without line breaks.
pub fn paste_single_line(buffer: &mut String, text: &str) {
    buffer.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
}
