use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{PopupSize, colors};

const LOGIN: PopupSize = PopupSize::new(50, 50);

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Tracklink Admin - Sign in", LOGIN).render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Endpoint
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(2), // Error / loading
            Constraint::Min(1),    // Hint
        ])
        .split(inner_area);

    let endpoint = Paragraph::new(Line::from(Span::styled(
        app.ctx().config().rpc.endpoint.clone(),
        Style::default().fg(colors::MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(endpoint, chunks[0]);

    InputField::new("Username", &app.login.username)
        .active(app.focus.is(0))
        .required()
        .render(frame, chunks[1]);
    InputField::new("Password", &app.login.password)
        .active(app.focus.is(1))
        .masked()
        .required()
        .render(frame, chunks[2]);

    let status = if app.login.is_loading() {
        Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(colors::WARNING),
        ))
    } else if let Some(error) = app.login.error() {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[3]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" Switch  ", Style::default().fg(Color::White)),
        Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled(" Sign in  ", Style::default().fg(Color::White)),
        Span::styled("[Ctrl+C]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(" Quit", Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[4]);
}
