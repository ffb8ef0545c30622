use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row},
};

use super::common::{draw_busy_line, form_rows};
use super::widgets::{DataTable, InputField, Popup, SelectField};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, popup};
use crate::utils::{format_timestamp, truncate};

const HEADER: [&str; 3] = ["URL", "Tracker", "Created"];
const WIDTHS: [Constraint; 3] = [
    Constraint::Min(30),
    Constraint::Length(20),
    Constraint::Length(20),
];

pub fn draw_targets_screen(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.targets;
    let targets = page.targets();
    let rows: Vec<Row> = targets
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(truncate(&t.url, URL_TRUNCATE_LENGTH)),
                Cell::from(page.tracker_name(&t.tracker_id)),
                Cell::from(format_timestamp(&t.created_at)),
            ])
        })
        .collect();

    DataTable::new(format!("Targets ({})", targets.len()), &HEADER, &WIDTHS)
        .rows(rows)
        .loading(page.is_loading())
        .empty("No targets yet", Some(("a", "to create one")))
        .selected(app.row)
        .render(frame, area);

    if page.is_create_open() {
        let options = page.tracker_options();
        let inner = Popup::new("New Target", popup::FORM).render(frame, area);
        let rows = form_rows(inner, 2);
        SelectField::new("Tracker", &options, page.form.tracker_id.as_deref())
            .placeholder("Select a tracker")
            .active(app.focus.is(0))
            .required()
            .render(frame, rows[0]);
        InputField::new("URL", &page.form.url)
            .active(app.focus.is(1))
            .placeholder("https://...")
            .required()
            .render(frame, rows[1]);
        draw_busy_line(frame, rows[2], page.is_creating(), "Creating");
    }
}
