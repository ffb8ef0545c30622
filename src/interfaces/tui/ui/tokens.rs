use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row},
};

use super::confirm::draw_delete_confirm;
use super::widgets::{Badge, DataTable};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::utils::{format_timestamp, short_id, truncate};

const HEADER: [&str; 6] = ["Code", "Tracking URL", "Campaign", "Channel", "Mode", "Created"];
const WIDTHS: [Constraint; 6] = [
    Constraint::Length(12),
    Constraint::Min(30),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(14),
    Constraint::Length(20),
];

pub fn draw_tokens_screen(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.tokens;
    let tokens = page.tokens();
    let dash = || "-".to_string();
    let rows: Vec<Row> = tokens
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(Span::styled(
                    t.short_code.clone(),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(truncate(&t.tracking_url, URL_TRUNCATE_LENGTH)),
                Cell::from(t.campaign_id.as_deref().map(|id| short_id(id).to_string()).unwrap_or_else(dash)),
                Cell::from(t.channel_id.as_deref().map(|id| short_id(id).to_string()).unwrap_or_else(dash)),
                Cell::from(Badge::mode(t.mode).span()),
                Cell::from(format_timestamp(&t.created_at)),
            ])
        })
        .collect();

    let title = match app.copied_label() {
        Some(what) => format!("Tokens ({}) - ✓ {} copied", tokens.len(), what),
        None => format!("Tokens ({})", tokens.len()),
    };

    DataTable::new(title, &HEADER, &WIDTHS)
        .rows(rows)
        .loading(page.is_loading())
        .empty("No tokens generated yet", Some(("n", "to open the generator")))
        .selected(app.row)
        .render(frame, area);

    if let Some(token) = page.pending_delete() {
        draw_delete_confirm(frame, area, "Token", &token.short_code, page.is_deleting());
    }
}
