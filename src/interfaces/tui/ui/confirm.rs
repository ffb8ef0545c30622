use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

/// 删除确认弹窗，`what` 为实体类型，`name` 为展示名
pub fn draw_delete_confirm(frame: &mut Frame, area: Rect, what: &str, name: &str, busy: bool) {
    let title = format!("Delete {}", what);
    let inner_area = Popup::new(&title, popup::DELETE_CONFIRM)
        .theme_color(colors::ERROR)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let footer = if busy {
        Line::from(Span::styled("Deleting...", Style::default().fg(colors::WARNING)))
    } else {
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD)),
            Span::styled(" Confirm   ", Style::default().fg(Color::White)),
            Span::styled("[n]", Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD)),
            Span::styled(" Cancel", Style::default().fg(Color::White)),
        ])
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete {} \"{}\"?", what.to_lowercase(), name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(colors::WARNING),
        )),
        Line::from(""),
        footer,
    ];

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner_area,
    );
}
