//! 下拉选择框
//!
//! 终端里没有弹出列表，焦点所在时用 ←/→ 在选项间循环，
//! 框内显示当前选中项与位置

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;
use crate::pages::{SelectOption, selected_label};

pub struct SelectField<'a> {
    title: &'a str,
    options: &'a [SelectOption],
    current: Option<&'a str>,
    placeholder: &'a str,
    is_active: bool,
    required: bool,
    loading: bool,
}

impl<'a> SelectField<'a> {
    pub fn new(title: &'a str, options: &'a [SelectOption], current: Option<&'a str>) -> Self {
        Self {
            title,
            options,
            current,
            placeholder: "None",
            is_active: false,
            required: false,
            loading: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn display_title(&self) -> String {
        let position = self
            .current
            .and_then(|v| self.options.iter().position(|o| o.value == v))
            .map(|i| format!(" {}/{}", i + 1, self.options.len()))
            .unwrap_or_default();
        let required = if self.required { " *" } else { "" };
        format!("{}{}{}", self.title, required, position)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let label = if self.loading {
            "Loading...".to_string()
        } else {
            selected_label(self.options, self.current, self.placeholder)
        };
        let value_style = if self.current.is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(colors::MUTED)
        };
        let border_style = if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(colors::MUTED)),
            Span::styled(label, value_style),
            Span::styled(" ▶", Style::default().fg(colors::MUTED)),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(border_style),
        );
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shows_position() {
        let options = vec![SelectOption::new("a", "A"), SelectOption::new("b", "B")];
        let field = SelectField::new("Tracker", &options, Some("b")).required();
        assert_eq!(field.display_title(), "Tracker * 2/2");

        let field = SelectField::new("Campaign", &options, None);
        assert_eq!(field.display_title(), "Campaign");
    }
}
