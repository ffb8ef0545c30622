//! 数据表格
//!
//! 统一处理三种状态：加载中显示骨架行，空列表显示提示，
//! 否则渲染带选中高亮的表格

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::constants::{SKELETON_ROWS, colors};

pub struct DataTable<'a> {
    title: String,
    header: &'a [&'a str],
    widths: &'a [Constraint],
    rows: Vec<Row<'a>>,
    loading: bool,
    empty_message: &'a str,
    empty_hint: Option<(&'a str, &'a str)>,
    selected: Option<usize>,
}

impl<'a> DataTable<'a> {
    pub fn new(title: impl Into<String>, header: &'a [&'a str], widths: &'a [Constraint]) -> Self {
        Self {
            title: title.into(),
            header,
            widths,
            rows: Vec::new(),
            loading: false,
            empty_message: "Nothing here yet",
            empty_hint: None,
            selected: None,
        }
    }

    pub fn rows(mut self, rows: Vec<Row<'a>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// 空状态文案与创建快捷键提示，如 `("a", "to create one")`
    pub fn empty(mut self, message: &'a str, hint: Option<(&'a str, &'a str)>) -> Self {
        self.empty_message = message;
        self.empty_hint = hint;
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED))
            .title(self.title.clone())
            .title_style(Style::default().fg(colors::PRIMARY))
    }

    fn header_row(&self) -> Row<'a> {
        Row::new(self.header.iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .bottom_margin(1)
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        if self.loading && self.rows.is_empty() {
            let skeleton = (0..SKELETON_ROWS).map(|_| {
                Row::new(self.widths.iter().map(|_| {
                    Cell::from("░░░░░░░░").style(Style::default().fg(colors::MUTED))
                }))
            });
            let table = Table::new(skeleton, self.widths.to_vec())
                .header(self.header_row())
                .block(self.block());
            frame.render_widget(table, area);
            return;
        }

        if self.rows.is_empty() {
            let mut text = vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled(
                    self.empty_message,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
            ];
            if let Some((key, action)) = self.empty_hint {
                text.push(Line::from(""));
                text.push(Line::from(vec![
                    Span::styled("Press ", Style::default().fg(colors::MUTED)),
                    Span::styled(
                        format!("[{}]", key),
                        Style::default()
                            .fg(colors::SUCCESS)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {}", action), Style::default().fg(colors::MUTED)),
                ]));
            }
            let empty = Paragraph::new(text)
                .block(self.block())
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let selected = self.selected.map(|i| i.min(self.rows.len() - 1));
        let mut state = TableState::default().with_selected(selected);
        let header = self.header_row();
        let block = self.block();
        let table = Table::new(self.rows, self.widths.to_vec())
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(table, area, &mut state);
    }
}
