//! 展示用的小工具函数

use chrono::{DateTime, NaiveDate};

/// 默认截断长度
pub const DEFAULT_TRUNCATE_LEN: usize = 40;
/// 列表中 site key 显示的前缀长度
pub const KEY_PREVIEW_LEN: usize = 12;

const DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M";

/// 将服务端时间戳格式化为 `May 2, 2024 14:05`
///
/// 无法解析时原样返回
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    // 部分接口只返回日期
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// 超过 `len` 个字符时截断并追加 `...`
pub fn truncate(s: &str, len: usize) -> String {
    match s.char_indices().nth(len) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// site key 前缀，用于列表
pub fn key_preview(key: &str) -> String {
    truncate(key, KEY_PREVIEW_LEN)
}

/// id 前 8 位，实体名称未加载时的占位
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
