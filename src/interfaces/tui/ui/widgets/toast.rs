//! Toast 浮层
//!
//! 右上角自上而下堆叠，最新的在最下面

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::interfaces::tui::constants::{MAX_VISIBLE_TOASTS, colors};
use crate::notify::{Toast, ToastKind};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

fn style_for(kind: ToastKind) -> (&'static str, Color) {
    match kind {
        ToastKind::Success => ("✓", colors::SUCCESS),
        ToastKind::Error => ("✗", colors::ERROR),
        ToastKind::Warning => ("!", colors::WARNING),
    }
}

/// 每条 toast 的位置；超出区域的不显示
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    (0..count.min(MAX_VISIBLE_TOASTS))
        .map(|i| Rect::new(x, area.y + 1 + i as u16 * TOAST_HEIGHT, width, TOAST_HEIGHT))
        .take_while(|r| r.bottom() <= area.bottom())
        .collect()
}

pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let start = toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
    let visible = &toasts[start..];

    for (toast, rect) in visible.iter().zip(toast_areas(area, visible.len())) {
        let (icon, color) = style_for(toast.kind);
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", icon),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(toast.message.clone(), Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
    }
}
