//! 表单焦点
//!
//! 表单字段按顺序编号，Tab / Shift+Tab 循环切换

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFocus {
    index: usize,
}

impl FormFocus {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn set(&mut self, index: usize) {
        self.index = index;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// 切换到下一个字段
    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.index = (self.index + 1) % count;
        }
    }

    /// 切换到上一个字段
    pub fn prev(&mut self, count: usize) {
        if count > 0 {
            self.index = (self.index + count - 1) % count;
        }
    }

    /// 字段数量变化（如删除标签行）后保持在范围内
    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut focus = FormFocus::default();
        focus.prev(3);
        assert_eq!(focus.index(), 2);
        focus.next(3);
        assert!(focus.is(0));
        focus.next(0);
        assert!(focus.is(0));
    }

    #[test]
    fn test_focus_clamp() {
        let mut focus = FormFocus::default();
        focus.set(7);
        focus.clamp(5);
        assert_eq!(focus.index(), 4);
        focus.clamp(0);
        assert_eq!(focus.index(), 0);
    }
}
