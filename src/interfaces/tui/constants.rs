//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 48;

/// 侧边栏宽度
pub const SIDEBAR_WIDTH: u16 = 22;

/// 复制成功提示的显示时长
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// 同时显示的 toast 数量上限
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// 加载中骨架屏的占位行数
pub const SKELETON_ROWS: usize = 5;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 创建/编辑表单
    pub const FORM: PopupSize = PopupSize::new(70, 70);
    /// 渠道表单（含标签行）
    pub const CHANNEL_FORM: PopupSize = PopupSize::new(75, 85);
    /// 批量导入
    pub const IMPORT: PopupSize = PopupSize::new(75, 70);
    /// 站点密钥展示
    pub const SITE_KEY: PopupSize = PopupSize::new(65, 45);
    /// 删除确认
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(60, 40);
    /// 自定义日期范围
    pub const DATE_RANGE: PopupSize = PopupSize::new(50, 40);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 85);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 次色调（事件序列）
    pub const SECONDARY: Color = Color::Magenta;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
    /// 图表分片配色，按顺序循环使用
    pub const PALETTE: [Color; 7] = [
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::LightRed,
        Color::Gray,
    ];
}
