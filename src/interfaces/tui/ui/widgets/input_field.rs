//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 激活状态高亮
//! - 占位符提示
//! - 密码遮蔽

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Name", &page.form.name)
///     .active(app.field == 0)
///     .required()
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    masked: bool,
    required: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            masked: false,
            required: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 密码遮蔽模式
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();
        if self.required {
            title.push_str(" *");
        }
        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} ({})", title, placeholder);
        }
        title
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn display_value(&self) -> String {
        let mut value = if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };
        if self.is_active {
            value.push('▏');
        }
        value
    }

    /// 渲染输入框，区域高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.display_value()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("Name", "").required();
        assert_eq!(field.display_title(), "Name *");

        let field = InputField::new("Medium", "").placeholder("optional");
        assert_eq!(field.display_title(), "Medium (optional)");

        let field = InputField::new("Medium", "email").placeholder("optional");
        assert_eq!(field.display_title(), "Medium");
    }

    #[test]
    fn test_input_field_masked() {
        let field = InputField::new("Password", "sécret").masked();
        assert_eq!(field.display_value(), "******");

        let field = InputField::new("Password", "ab").masked().active(true);
        assert_eq!(field.display_value(), "**▏");
    }
}
