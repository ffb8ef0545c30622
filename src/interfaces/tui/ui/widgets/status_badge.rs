//! 状态徽标
//!
//! 把实体状态、追踪器类型、跳转方式渲染成带颜色的短标签

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::interfaces::tui::constants::colors;
use crate::models::{RedirectMode, Status, TrackerType};

/// 徽标文本与颜色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub color: Color,
}

impl Badge {
    pub fn status(status: &Status) -> Self {
        let color = match status {
            Status::Active => colors::SUCCESS,
            Status::Inactive => colors::MUTED,
            Status::Other(_) => colors::WARNING,
        };
        Self {
            text: status.as_str().to_uppercase(),
            color,
        }
    }

    pub fn tracker_type(kind: TrackerType) -> Self {
        let color = match kind {
            TrackerType::Ad => colors::PRIMARY,
            TrackerType::Web => colors::SECONDARY,
        };
        Self {
            text: kind.as_ref().to_uppercase(),
            color,
        }
    }

    pub fn mode(mode: RedirectMode) -> Self {
        Self {
            text: mode.label().to_string(),
            color: Color::Blue,
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(
            self.text.clone(),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )
    }
}
