use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

type Entry = (&'static str, &'static str, Color);

const SECTIONS: &[(&str, &[Entry])] = &[
    (
        "NAVIGATION",
        &[
            ("1-7", "Switch section", Color::Cyan),
            ("Up/Down, j/k", "Navigate list", Color::Cyan),
            ("Home / End", "Jump to top / bottom", Color::Cyan),
            ("PageUp/PageDown", "Scroll 10 items", Color::Cyan),
            ("L", "Sign out", Color::Red),
        ],
    ),
    (
        "LISTS",
        &[
            ("a", "Create", Color::Green),
            ("e, Enter", "Edit tracker", Color::Yellow),
            ("d", "Delete tracker / token", Color::Red),
            ("f / F", "Cycle tracker filter", Color::Yellow),
            ("g / G", "Cycle campaign filter (channels)", Color::Yellow),
            ("i", "Import channels from JSON", Color::Yellow),
            ("n", "Open token generator", Color::Green),
            ("r", "Reload", Color::Cyan),
        ],
    ),
    (
        "DASHBOARD",
        &[
            ("p", "Cycle period", Color::Cyan),
            ("e", "Edit custom range", Color::Yellow),
            ("t / c / n / s", "Cycle tracker / campaign / channel / site", Color::Cyan),
            ("m", "Cycle trend mode", Color::Magenta),
        ],
    ),
    (
        "CLIPBOARD",
        &[
            ("y", "Copy short code / URL / site key", Color::Green),
            ("Y", "Copy tracking URL", Color::Green),
        ],
    ),
    (
        "FORM EDITING",
        &[
            ("Tab / Shift+Tab", "Switch field", Color::Cyan),
            ("Left/Right, Space", "Change selection", Color::Cyan),
            ("Ctrl+N / Ctrl+D", "Add / remove channel tag", Color::Green),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
    ),
    (
        "GENERAL",
        &[
            ("?", "Show this help", Color::Cyan),
            ("q", "Quit application", Color::Magenta),
        ],
    ),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, entries) in SECTIONS {
        lines.push(Line::from(vec![Span::styled(
            *title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]));
        for (key, desc, color) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", key), Style::default().fg(*color)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![Span::styled(
        "Press Esc, q or ? to close",
        Style::default().fg(Color::DarkGray),
    )]));
    lines
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_para = Paragraph::new(help_lines()).alignment(Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
