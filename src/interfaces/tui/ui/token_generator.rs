use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::SelectField;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::models::{RedirectMode, Token};
use crate::pages::SelectOption;

pub fn draw_generator_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_form(frame, app, chunks[0]);
    draw_result(frame, app, chunks[1]);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.generator;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED))
        .title("Generate Tracking Token")
        .title_style(Style::default().fg(colors::PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let trackers = page.tracker_options();
    let campaigns = page.campaign_options();
    let channels = page.channel_options();
    let targets = page.target_options();
    let modes: Vec<SelectOption> = [RedirectMode::Http302, RedirectMode::Js]
        .iter()
        .map(|m| SelectOption::new(m.as_ref(), m.label()))
        .collect();
    let loading = page.is_loading_options();
    let has_tracker = page.tracker_id().is_some();

    SelectField::new("Tracker", &trackers, page.tracker_id())
        .placeholder("Select a tracker")
        .active(app.focus.is(0))
        .required()
        .render(frame, rows[0]);
    SelectField::new("Campaign", &campaigns, page.campaign_id())
        .placeholder(if has_tracker { "None" } else { "Pick a tracker first" })
        .active(app.focus.is(1))
        .loading(loading && has_tracker)
        .render(frame, rows[1]);
    SelectField::new("Channel", &channels, page.channel_id())
        .placeholder(if page.campaign_id().is_some() {
            "None"
        } else {
            "Pick a campaign first"
        })
        .active(app.focus.is(2))
        .render(frame, rows[2]);
    SelectField::new("Target", &targets, page.target_id())
        .placeholder(if has_tracker { "Select a target" } else { "Pick a tracker first" })
        .active(app.focus.is(3))
        .loading(loading && has_tracker)
        .required()
        .render(frame, rows[3]);
    SelectField::new("Redirect Mode", &modes, Some(page.mode().as_ref()))
        .active(app.focus.is(4))
        .render(frame, rows[4]);

    let status = if page.is_generating() {
        Span::styled("Generating...", Style::default().fg(colors::WARNING))
    } else if page.can_generate() {
        Span::styled("Press [Enter] to generate", Style::default().fg(colors::SUCCESS))
    } else {
        Span::styled("Tracker and target are required", Style::default().fg(colors::MUTED))
    };
    frame.render_widget(Paragraph::new(Line::from(status)), rows[5]);
}

fn token_lines(token: &Token) -> Vec<Line<'static>> {
    let label = |text: &str| Span::styled(format!("{:<14}", text), Style::default().fg(Color::Gray));
    vec![
        Line::from(vec![
            label("Short code"),
            Span::styled(
                token.short_code.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(label("Tracking URL")),
        Line::from(Span::styled(
            token.tracking_url.clone(),
            Style::default().fg(colors::WARNING),
        )),
        Line::from(""),
        Line::from(vec![
            label("Mode"),
            Span::styled(token.mode.label(), Style::default().fg(Color::White)),
        ]),
    ]
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED))
        .title("Result")
        .title_style(Style::default().fg(colors::PRIMARY));

    let mut lines = match app.generator.generated() {
        Some(token) => token_lines(token),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No token generated yet",
                Style::default().fg(colors::MUTED),
            )),
        ],
    };

    if app.generator.generated().is_some() {
        lines.push(Line::from(""));
        lines.push(match app.copied_label() {
            Some(what) => Line::from(Span::styled(
                format!("✓ {} copied", what),
                Style::default().fg(colors::SUCCESS),
            )),
            None => Line::from(vec![
                Span::styled("[y]", Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD)),
                Span::styled(" Copy code  ", Style::default().fg(Color::White)),
                Span::styled("[Y]", Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD)),
                Span::styled(" Copy URL  ", Style::default().fg(Color::White)),
                Span::styled("[v]", Style::default().fg(colors::WARNING).add_modifier(Modifier::BOLD)),
                Span::styled(" View all", Style::default().fg(Color::White)),
            ]),
        });
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
