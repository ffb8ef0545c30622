use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::pages::ChannelModal;
use crate::router::{NAV_ITEMS, Route};

/// Draw title bar with version, current page and endpoint
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled(
            "Tracklink Admin",
            Style::default().fg(colors::PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("{} ", app.route.title()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            app.ctx().config().rpc.endpoint.clone(),
            Style::default().fg(colors::MUTED),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the navigation sidebar, highlighting the active section
pub fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    // 生成器页面归属于 Tokens
    let active = match app.route {
        Route::TokenGenerator => Route::Tokens,
        route => route,
    };

    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .map(|item| {
            let style = if item.route == active {
                Style::default()
                    .fg(colors::HIGHLIGHT_FG)
                    .bg(colors::HIGHLIGHT_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", item.shortcut), Style::default().fg(colors::MUTED)),
                Span::styled(format!(" {:<14}", item.label), style),
            ]))
        })
        .collect();

    let sidebar = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED))
            .title("Menu"),
    );
    frame.render_widget(sidebar, area);
}

fn footer_shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    let form = vec![
        ("Tab", "Next Field", Color::Cyan),
        ("←/→", "Change", Color::Cyan),
        ("Enter", "Save", Color::Green),
        ("Esc", "Cancel", Color::Red),
    ];
    let confirm = vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)];

    match app.route {
        Route::Dashboard if app.editing_range => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Apply", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        Route::Dashboard => vec![
            ("p", "Period", Color::Cyan),
            ("t/c/n/s", "Scope", Color::Cyan),
            ("m", "Trend Mode", Color::Magenta),
            ("e", "Edit Range", Color::Yellow),
            ("r", "Refresh", Color::Green),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        Route::Trackers if app.trackers.pending_delete().is_some() => confirm,
        Route::Trackers if app.trackers.modal().is_some() => form,
        Route::Trackers => vec![
            ("↑/↓", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("r", "Reload", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        Route::Campaigns if app.campaigns.is_create_open() => form,
        Route::Campaigns => vec![
            ("↑/↓", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("f", "Filter Tracker", Color::Yellow),
            ("r", "Reload", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
        Route::Channels => match app.channels.modal() {
            Some(ChannelModal::Create) => vec![
                ("Tab", "Next Field", Color::Cyan),
                ("Ctrl+N", "Add Tag", Color::Green),
                ("Ctrl+D", "Remove Tag", Color::Red),
                ("Enter", "Save", Color::Green),
                ("Esc", "Cancel", Color::Red),
            ],
            Some(ChannelModal::Import) => vec![
                ("Enter", "Import", Color::Green),
                ("Esc", "Cancel", Color::Red),
            ],
            None => vec![
                ("↑/↓", "Navigate", Color::Cyan),
                ("a", "Add", Color::Green),
                ("i", "Import", Color::Yellow),
                ("f/g", "Filters", Color::Yellow),
                ("r", "Reload", Color::Cyan),
                ("q", "Quit", Color::Magenta),
            ],
        },
        Route::Targets if app.targets.is_create_open() => form,
        Route::Targets => vec![
            ("↑/↓", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("y", "Copy URL", Color::Green),
            ("r", "Reload", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
        Route::Sites if app.sites.created_site().is_some() => vec![
            ("y", "Copy Key", Color::Green),
            ("Enter/Esc", "Close", Color::Red),
        ],
        Route::Sites if app.sites.modal().is_some() => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        Route::Sites => vec![
            ("↑/↓", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("r", "Reload", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
        Route::Tokens if app.tokens.pending_delete().is_some() => confirm,
        Route::Tokens => vec![
            ("↑/↓", "Navigate", Color::Cyan),
            ("n", "Generate", Color::Green),
            ("y", "Copy Code", Color::Green),
            ("Y", "Copy URL", Color::Green),
            ("d", "Delete", Color::Red),
            ("r", "Reload", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
        Route::TokenGenerator => vec![
            ("Tab", "Next Field", Color::Cyan),
            ("←/→", "Change", Color::Cyan),
            ("Enter", "Generate", Color::Green),
            ("v", "View All", Color::Yellow),
            ("Esc", "Back", Color::Red),
        ],
        Route::NotFound => vec![("Enter", "Go Home", Color::Green), ("q", "Quit", Color::Magenta)],
        Route::Login => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Sign In", Color::Green),
            ("Ctrl+C", "Quit", Color::Red),
        ],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = footer_shortcuts(app);

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// One-line filter summary: `Label: value`
pub fn filter_span(label: &str, value: String, key: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(colors::MUTED)),
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default().fg(colors::PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

/// 表单布局：每个字段高 3 行，末尾留一行给提交状态
pub fn form_rows(area: Rect, fields: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(3); fields];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// 提交中提示
pub fn draw_busy_line(frame: &mut Frame, area: Rect, busy: bool, label: &str) {
    if busy {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{}...", label),
                Style::default().fg(colors::WARNING),
            )),
            area,
        );
    }
}
