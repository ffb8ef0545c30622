use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Cell, Paragraph, Row},
};

use super::common::{draw_busy_line, filter_span, form_rows};
use super::widgets::{Badge, DataTable, InputField, Popup, SelectField};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::pages::selected_label;
use crate::utils::format_timestamp;

const HEADER: [&str; 4] = ["Name", "Tracker", "Status", "Created"];
const WIDTHS: [Constraint; 4] = [
    Constraint::Min(20),
    Constraint::Length(20),
    Constraint::Length(10),
    Constraint::Length(20),
];

pub fn draw_campaigns_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let page = &app.campaigns;
    let options = page.tracker_options();
    let filter = Line::from(filter_span(
        "Tracker",
        selected_label(&options, page.filter_tracker(), "All"),
        "f",
    ));
    frame.render_widget(Paragraph::new(filter), chunks[0]);

    let campaigns = page.campaigns();
    let rows: Vec<Row> = campaigns
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.name.clone()),
                Cell::from(page.tracker_name(&c.tracker_id)),
                Cell::from(Badge::status(&c.status).span()),
                Cell::from(format_timestamp(&c.created_at)),
            ])
        })
        .collect();

    DataTable::new(format!("Campaigns ({})", campaigns.len()), &HEADER, &WIDTHS)
        .rows(rows)
        .loading(page.is_loading())
        .empty("No campaigns yet", Some(("a", "to create one")))
        .selected(app.row)
        .render(frame, chunks[1]);

    if page.is_create_open() {
        let inner = Popup::new("New Campaign", popup::FORM).render(frame, area);
        let rows = form_rows(inner, 2);
        SelectField::new("Tracker", &options, page.form.tracker_id.as_deref())
            .placeholder("Select an ad tracker")
            .active(app.focus.is(0))
            .required()
            .render(frame, rows[0]);
        InputField::new("Name", &page.form.name)
            .active(app.focus.is(1))
            .required()
            .render(frame, rows[1]);
        draw_busy_line(frame, rows[2], page.is_creating(), "Creating");
    }
}
