use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Wrap},
};

use super::common::{draw_busy_line, form_rows};
use super::widgets::{Badge, DataTable, InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::models::Site;
use crate::pages::SiteModal;
use crate::utils::{format_timestamp, key_preview};

const HEADER: [&str; 5] = ["Name", "Domain", "Site Key", "Status", "Created"];
const WIDTHS: [Constraint; 5] = [
    Constraint::Min(16),
    Constraint::Min(20),
    Constraint::Length(18),
    Constraint::Length(10),
    Constraint::Length(20),
];

pub fn draw_sites_screen(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.sites;
    let sites = page.sites();
    let rows: Vec<Row> = sites
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.name.clone()),
                Cell::from(s.domain.clone()),
                Cell::from(Span::styled(
                    key_preview(&s.site_key),
                    Style::default().fg(colors::MUTED),
                )),
                Cell::from(Badge::status(&s.status).span()),
                Cell::from(format_timestamp(&s.created_at)),
            ])
        })
        .collect();

    DataTable::new(format!("Sites ({})", sites.len()), &HEADER, &WIDTHS)
        .rows(rows)
        .loading(page.is_loading())
        .empty("No sites yet", Some(("a", "to register one")))
        .selected(app.row)
        .render(frame, area);

    match page.modal() {
        Some(SiteModal::Create) => {
            let inner = Popup::new("New Site", popup::FORM).render(frame, area);
            let rows = form_rows(inner, 2);
            InputField::new("Name", &page.form.name)
                .active(app.focus.is(0))
                .required()
                .render(frame, rows[0]);
            InputField::new("Domain", &page.form.domain)
                .active(app.focus.is(1))
                .placeholder("example.com")
                .required()
                .render(frame, rows[1]);
            draw_busy_line(frame, rows[2], page.is_creating(), "Creating");
        }
        Some(SiteModal::Created(site)) => draw_site_key(frame, app, site, area),
        None => {}
    }
}

/// 新站点的完整 key 只在创建后展示一次
fn draw_site_key(frame: &mut Frame, app: &App, site: &Site, area: Rect) {
    let inner = Popup::new("Site Created", popup::SITE_KEY)
        .theme_color(colors::SUCCESS)
        .render(frame, area);

    let copied = match app.copied_label() {
        Some(what) => Line::from(Span::styled(
            format!("✓ {} copied", what),
            Style::default().fg(colors::SUCCESS),
        )),
        None => Line::from(""),
    };

    let text = vec![
        Line::from(Span::styled(
            format!("{} ({})", site.name, site.domain),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Site key:", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            site.site_key.clone(),
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Store this key now. Embed it in the site's tracking snippet.",
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        copied,
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(colors::SUCCESS).add_modifier(Modifier::BOLD)),
            Span::styled(" Copy key   ", Style::default().fg(Color::White)),
            Span::styled("[Enter]", Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD)),
            Span::styled(" Close", Style::default().fg(Color::White)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        inner,
    );
}
