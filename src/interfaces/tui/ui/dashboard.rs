//! 仪表盘
//!
//! 自上而下：筛选栏、实体数量、汇总卡片、趋势与机器人占比、
//! 排行榜、分布与 24 小时分布

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::common::filter_span;
use super::widgets::{InputField, Popup, charts};
use crate::analytics::{DashboardView, Period, SummaryCard, today_utc};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::pages::{EntityCount, selected_label};

pub fn draw_dashboard_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Filters
            Constraint::Length(1),      // Status
            Constraint::Length(3),      // Entity counts
            Constraint::Length(3),      // Summary cards
            Constraint::Percentage(30), // Trend + bot rate
            Constraint::Percentage(35), // Rankings
            Constraint::Min(6),         // Distributions + hourly
        ])
        .split(area);

    let view = app.dashboard.view();

    draw_filters(frame, app, chunks[0]);
    draw_status(frame, app, chunks[1]);
    draw_entity_counts(frame, &app.dashboard.entity_counts(), chunks[2]);
    draw_cards(frame, &view.cards, chunks[3]);
    draw_trends(frame, app, &view, chunks[4]);
    draw_rankings(frame, &view, chunks[5]);
    draw_distributions(frame, &view, chunks[6]);

    if app.editing_range {
        draw_range_editor(frame, app, area);
    }
}

fn range_label(app: &App) -> String {
    match app.dashboard.range_on(today_utc()) {
        Some(range) if range.start == range.end => range.start_str(),
        Some(range) => format!("{} → {}", range.start_str(), range.end_str()),
        None => "invalid range".to_string(),
    }
}

fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.dashboard;
    let mut spans = filter_span(
        "Period",
        format!("{} ({})", page.period().label(), range_label(app)),
        "p",
    );
    spans.extend(filter_span(
        "Tracker",
        selected_label(&page.tracker_options(), page.tracker_id(), "All"),
        "t",
    ));
    spans.extend(filter_span(
        "Campaign",
        selected_label(&page.campaign_options(), page.campaign_id(), "All"),
        "c",
    ));
    spans.extend(filter_span(
        "Channel",
        selected_label(&page.channel_options(), page.channel_id(), "All"),
        "n",
    ));
    spans.extend(filter_span(
        "Site",
        selected_label(&page.site_options(), page.site_id(), "All"),
        "s",
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.dashboard;
    let errors = page.errors();
    let line = if !errors.is_empty() {
        Line::from(Span::styled(
            format!("[ERROR] {}", errors.join(" | ")),
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        ))
    } else if page.is_loading() {
        let what = match (page.is_clicks_loading(), page.is_events_loading()) {
            (true, true) => "clicks and events",
            (true, false) => "clicks",
            _ => "events",
        };
        Line::from(Span::styled(
            format!("Loading {}...", what),
            Style::default().fg(colors::WARNING),
        ))
    } else {
        Line::from(Span::styled(
            format!("Trend: {}", page.trend_mode().label()),
            Style::default().fg(colors::MUTED),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn stat_box(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );
    frame.render_widget(paragraph, area);
}

fn even_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}

fn draw_entity_counts(frame: &mut Frame, counts: &[EntityCount], area: Rect) {
    for (count, cell) in counts.iter().zip(even_columns(area, counts.len())) {
        stat_box(frame, cell, count.label, count.display(), colors::PRIMARY);
    }
}

fn draw_cards(frame: &mut Frame, cards: &[SummaryCard], area: Rect) {
    for (card, cell) in cards.iter().zip(even_columns(area, cards.len())) {
        stat_box(frame, cell, card.label, card.value.clone(), colors::WARNING);
    }
}

fn draw_trends(frame: &mut Frame, app: &App, view: &DashboardView, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    charts::render_trend(frame, cols[0], &view.trend, app.dashboard.trend_mode());
    charts::render_bot_rate(frame, cols[1], &view.trend, &view.bot_trend);
}

fn draw_rankings(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // 上排 4 个，下排其余
    let (top, bottom) = view.rankings.split_at(view.rankings.len().min(4));
    for (ranking, cell) in top.iter().zip(even_columns(rows[0], top.len())) {
        charts::render_ranking(frame, cell, ranking);
    }
    for (ranking, cell) in bottom.iter().zip(even_columns(rows[1], bottom.len())) {
        charts::render_ranking(frame, cell, ranking);
    }
}

fn draw_distributions(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let cells = even_columns(cols[0], view.distributions.len());
    for (distribution, cell) in view.distributions.iter().zip(cells) {
        charts::render_distribution(frame, cell, distribution);
    }
    charts::render_hourly(frame, cols[1], &view.hourly, view.has_hourly_data());
}

fn draw_range_editor(frame: &mut Frame, app: &App, area: Rect) {
    let inner = Popup::new("Custom Range", popup::DATE_RANGE).render(frame, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let custom = &app.dashboard.custom;
    InputField::new("Start", &custom.start)
        .active(app.focus.is(0))
        .placeholder("YYYY-MM-DD")
        .required()
        .render(frame, rows[0]);
    InputField::new("End", &custom.end)
        .active(app.focus.is(1))
        .placeholder("YYYY-MM-DD")
        .required()
        .render(frame, rows[1]);

    let valid = app.dashboard.period() != Period::Custom || app.dashboard.range_on(today_utc()).is_some();
    let hint = if valid {
        Span::styled("Inclusive, UTC", Style::default().fg(colors::MUTED))
    } else {
        Span::styled("Start must be on or before end", Style::default().fg(colors::WARNING))
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), rows[2]);
}
