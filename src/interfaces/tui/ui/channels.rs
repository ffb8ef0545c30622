use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Wrap},
};

use super::common::{draw_busy_line, filter_span};
use super::widgets::{DataTable, InputField, Popup, SelectField};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::pages::{ChannelModal, selected_label};
use crate::utils::truncate;

const HEADER: [&str; 5] = ["Name", "Campaign", "Source", "Medium", "Tags"];
const WIDTHS: [Constraint; 5] = [
    Constraint::Min(16),
    Constraint::Length(18),
    Constraint::Length(14),
    Constraint::Length(12),
    Constraint::Min(20),
];
const FIXED_FIELDS: usize = 5;

pub fn draw_channels_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let page = &app.channels;
    let mut filters = filter_span(
        "Tracker",
        selected_label(&page.tracker_options(), page.filter_tracker(), "All"),
        "f",
    );
    filters.extend(filter_span(
        "Campaign",
        selected_label(&page.filter_campaign_options(), page.filter_campaign(), "All"),
        "g",
    ));
    frame.render_widget(Paragraph::new(Line::from(filters)), chunks[0]);

    let channels = page.channels();
    let rows: Vec<Row> = channels
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.name.clone()),
                Cell::from(page.campaign_name(&c.campaign_id)),
                Cell::from(c.source.clone()),
                Cell::from(c.medium.clone()),
                Cell::from(Span::styled(
                    truncate(&c.tags_display(), 32),
                    Style::default().fg(colors::MUTED),
                )),
            ])
        })
        .collect();

    DataTable::new(format!("Channels ({})", channels.len()), &HEADER, &WIDTHS)
        .rows(rows)
        .loading(page.is_loading())
        .empty("No channels yet", Some(("a", "to create one, [i] to import")))
        .selected(app.row)
        .render(frame, chunks[1]);

    match page.modal() {
        Some(ChannelModal::Create) => draw_create_form(frame, app, area),
        Some(ChannelModal::Import) => draw_import(frame, app, area),
        None => {}
    }
}

fn draw_create_form(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.channels;
    let form = &page.form;
    let inner = Popup::new("New Channel", popup::CHANNEL_FORM).render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tracker | Campaign
            Constraint::Length(3), // Name
            Constraint::Length(3), // Source | Medium
            Constraint::Length(1), // Tags header
            Constraint::Min(3),    // Tag rows
            Constraint::Length(1), // Busy
        ])
        .split(inner);
    let halves = |area: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    };

    let trackers = page.tracker_options();
    let campaigns = page.form_campaign_options();
    let top = halves(chunks[0]);
    SelectField::new("Tracker", &trackers, form.tracker_id.as_deref())
        .placeholder("Select a tracker")
        .active(app.focus.is(0))
        .required()
        .render(frame, top[0]);
    SelectField::new("Campaign", &campaigns, form.campaign_id.as_deref())
        .placeholder(if form.tracker_id.is_some() {
            "Select a campaign"
        } else {
            "Pick a tracker first"
        })
        .active(app.focus.is(1))
        .required()
        .render(frame, top[1]);

    InputField::new("Name", &form.name)
        .active(app.focus.is(2))
        .required()
        .render(frame, chunks[1]);

    let utm = halves(chunks[2]);
    InputField::new("Source", &form.source)
        .active(app.focus.is(3))
        .placeholder("optional")
        .render(frame, utm[0]);
    InputField::new("Medium", &form.medium)
        .active(app.focus.is(4))
        .placeholder("optional")
        .render(frame, utm[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Tags ({})  ", form.tags.len()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("Ctrl+N add, Ctrl+D remove", Style::default().fg(colors::MUTED)),
        ])),
        chunks[3],
    );

    // 标签行超出可见区域时不显示，保持焦点行可见
    let visible = (chunks[4].height / 3).max(1) as usize;
    let focused_row = app.focus.index().saturating_sub(FIXED_FIELDS) / 2;
    let first = focused_row.saturating_sub(visible - 1);
    let tag_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); visible])
        .split(chunks[4]);

    for (slot, (row, tag)) in form.tags.iter().enumerate().skip(first).take(visible).enumerate() {
        let cols = halves(tag_areas[slot]);
        let key_field = FIXED_FIELDS + row * 2;
        InputField::new("Key", &tag.key)
            .active(app.focus.is(key_field))
            .render(frame, cols[0]);
        InputField::new("Value", &tag.value)
            .active(app.focus.is(key_field + 1))
            .render(frame, cols[1]);
    }

    draw_busy_line(frame, chunks[5], page.is_creating(), "Creating");
}

fn draw_import(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.channels;
    let inner = Popup::new("Import Channels", popup::IMPORT).render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Paste a JSON array of channels:",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                r#"[{"tracker_id": "...", "campaign_id": "...", "name": "...", "tags": {}}]"#,
                Style::default().fg(colors::MUTED),
            )),
        ]),
        chunks[0],
    );

    let mut text = page.import_json.clone();
    text.push('▏');
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::HIGHLIGHT_BG))
                .title("JSON"),
        ),
        chunks[1],
    );

    draw_busy_line(frame, chunks[2], page.is_importing(), "Importing");
}
