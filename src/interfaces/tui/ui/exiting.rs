use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

/// 退出确认。会话 token 已落盘，下次启动无需重新登录
pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner = Popup::new("Quit", popup::EXITING)
        .theme_color(colors::SECONDARY)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let session_note = if app.ctx().auth().is_authenticated() {
        "Your session stays signed in."
    } else {
        "You are not signed in."
    };

    let lines = vec![
        Line::from(Span::styled(
            "Leave the admin console?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(session_note, Style::default().fg(colors::MUTED))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD)),
            Span::raw(" quit   "),
            Span::styled("[n]", Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD)),
            Span::raw(" stay"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
