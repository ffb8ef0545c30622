//! 仪表盘图表组件
//!
//! - 排行榜：横向条形
//! - 分布：带占比的图例（终端里代替饼图）
//! - 趋势：点击/事件折线，`Both` 模式下事件叠加在点击之上
//! - 机器人占比趋势
//! - 24 小时分布柱状图

use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::analytics::{Distribution, HourlyPoint, Ranking, TrendMode, TrendPoint, bot_rate};
use crate::interfaces::tui::constants::colors;
use crate::utils::truncate;

const RANKING_LABEL_WIDTH: usize = 16;

fn chart_block(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED))
        .title(title)
        .title_style(Style::default().fg(colors::PRIMARY))
}

fn no_data(frame: &mut Frame, area: Rect, title: String) {
    let empty = Paragraph::new(Line::from(Span::styled(
        "No data",
        Style::default().fg(colors::MUTED),
    )))
    .block(chart_block(title))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(empty, area);
}

/// 条形长度，按最大值等比缩放，非零值至少占一格
pub fn bar_width(count: u64, max: u64, width: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * width as f64).round().max(1.0) as usize
}

pub fn render_ranking(frame: &mut Frame, area: Rect, ranking: &Ranking) {
    if ranking.items.is_empty() {
        no_data(frame, area, ranking.title.to_string());
        return;
    }

    let max = ranking.items.iter().map(|i| i.count).max().unwrap_or(0);
    let count_width = max.to_string().len();
    let bar_space = (area.width as usize)
        .saturating_sub(RANKING_LABEL_WIDTH + count_width + 5)
        .max(1);

    let lines: Vec<Line> = ranking
        .items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(
                    format!(
                        "{:<width$} ",
                        truncate(&item.name, RANKING_LABEL_WIDTH - 1),
                        width = RANKING_LABEL_WIDTH
                    ),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    "█".repeat(bar_width(item.count, max, bar_space)),
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(format!(" {}", item.count), Style::default().fg(colors::MUTED)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(chart_block(ranking.title.to_string())),
        area,
    );
}

pub fn render_distribution(frame: &mut Frame, area: Rect, distribution: &Distribution) {
    if distribution.slices.is_empty() {
        no_data(frame, area, distribution.title.to_string());
        return;
    }

    let lines: Vec<Line> = distribution
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let color = colors::PALETTE[i % colors::PALETTE.len()];
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<18}", truncate(&slice.name, 17)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>4}%", distribution.percent(slice)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(chart_block(distribution.title.to_string())),
        area,
    );
}

fn x_labels(dates: &[String]) -> Vec<Line<'static>> {
    match dates {
        [] => Vec::new(),
        [only] => vec![Line::from(only.clone())],
        [first, .., last] => vec![Line::from(first.clone()), Line::from(last.clone())],
    }
}

fn y_axis(max: f64) -> Axis<'static> {
    let top = max.max(1.0);
    Axis::default()
        .style(Style::default().fg(colors::MUTED))
        .bounds([0.0, top])
        .labels(vec![
            Line::from("0"),
            Line::from(format!("{}", (top / 2.0).round())),
            Line::from(format!("{}", top.round())),
        ])
}

/// 趋势序列的坐标点：`Both` 模式下第二条线是累加值
pub fn trend_series(points: &[TrendPoint], mode: TrendMode) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let clicks = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.clicks as f64))
        .collect();
    let events = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let y = if mode.is_stacked() { p.total() } else { p.events };
            (i as f64, y as f64)
        })
        .collect();
    (clicks, events)
}

pub fn render_trend(frame: &mut Frame, area: Rect, points: &[TrendPoint], mode: TrendMode) {
    let title = format!("Trend ({})", mode.label());
    if points.is_empty() {
        no_data(frame, area, title);
        return;
    }

    let (clicks, events) = trend_series(points, mode);
    let mut datasets = Vec::new();
    if mode.shows_clicks() {
        datasets.push(
            Dataset::default()
                .name("Clicks")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors::PRIMARY))
                .data(&clicks),
        );
    }
    if mode.shows_events() {
        datasets.push(
            Dataset::default()
                .name(if mode.is_stacked() { "Clicks + Events" } else { "Events" })
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors::SECONDARY))
                .data(&events),
        );
    }

    let max = points.iter().map(|p| mode.value(p)).max().unwrap_or(0) as f64;
    let dates: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
    let chart = Chart::new(datasets)
        .block(chart_block(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors::MUTED))
                .bounds([0.0, (points.len().saturating_sub(1)).max(1) as f64])
                .labels(x_labels(&dates)),
        )
        .y_axis(y_axis(max));
    frame.render_widget(chart, area);
}

/// 每天的机器人占比（百分比），按趋势中的日期对齐
pub fn bot_rate_points(trend: &[TrendPoint], bot_trend: &[TrendPoint]) -> Vec<(String, f64)> {
    let bots: HashMap<&str, u64> = bot_trend.iter().map(|p| (p.date.as_str(), p.total())).collect();
    trend
        .iter()
        .map(|p| {
            let b = bots.get(p.date.as_str()).copied().unwrap_or(0);
            (p.date.clone(), bot_rate(b, p.total()))
        })
        .collect()
}

pub fn render_bot_rate(frame: &mut Frame, area: Rect, trend: &[TrendPoint], bot_trend: &[TrendPoint]) {
    let rates = bot_rate_points(trend, bot_trend);
    if rates.is_empty() {
        no_data(frame, area, "Bot Rate".to_string());
        return;
    }

    let data: Vec<(f64, f64)> = rates
        .iter()
        .enumerate()
        .map(|(i, (_, rate))| (i as f64, *rate))
        .collect();
    let dates: Vec<String> = rates.iter().map(|(d, _)| d.clone()).collect();
    let max = rates.iter().map(|(_, r)| *r).fold(0.0, f64::max);

    let chart = Chart::new(vec![
        Dataset::default()
            .name("Bot %")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors::WARNING))
            .data(&data),
    ])
    .block(chart_block("Bot Rate (%)"))
    .x_axis(
        Axis::default()
            .style(Style::default().fg(colors::MUTED))
            .bounds([0.0, (data.len().saturating_sub(1)).max(1) as f64])
            .labels(x_labels(&dates)),
    )
    .y_axis(y_axis(max));
    frame.render_widget(chart, area);
}

pub fn render_hourly(frame: &mut Frame, area: Rect, hourly: &[HourlyPoint], has_data: bool) {
    if !has_data {
        no_data(frame, area, "Hourly Distribution".to_string());
        return;
    }

    let labels: Vec<String> = hourly.iter().map(|h| format!("{:02}", h.hour)).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(hourly)
        .map(|(label, h)| (label.as_str(), h.total()))
        .collect();

    let chart = BarChart::default()
        .block(chart_block("Hourly Distribution (UTC)"))
        .data(data.as_slice())
        .bar_width(2)
        .bar_gap(1)
        .bar_style(Style::default().fg(colors::PRIMARY))
        .value_style(Style::default().fg(Color::Black).bg(colors::PRIMARY));
    frame.render_widget(chart, area);
}
