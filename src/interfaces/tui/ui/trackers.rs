use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row},
};

use super::common::{draw_busy_line, form_rows};
use super::confirm::draw_delete_confirm;
use super::widgets::{Badge, DataTable, InputField, Popup, SelectField};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::models::{RedirectMode, Status, TrackerType};
use crate::pages::{SelectOption, TrackerModal};
use crate::utils::format_timestamp;

const HEADER: [&str; 5] = ["Name", "Type", "Mode", "Status", "Created"];
const WIDTHS: [Constraint; 5] = [
    Constraint::Min(20),
    Constraint::Length(6),
    Constraint::Length(14),
    Constraint::Length(10),
    Constraint::Length(20),
];

pub fn draw_trackers_screen(frame: &mut Frame, app: &App, area: Rect) {
    let trackers = app.trackers.trackers();
    let rows: Vec<Row> = trackers
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.name.clone()),
                Cell::from(Badge::tracker_type(t.kind).span()),
                Cell::from(Badge::mode(t.mode).span()),
                Cell::from(Badge::status(&t.status).span()),
                Cell::from(format_timestamp(&t.created_at)),
            ])
        })
        .collect();

    DataTable::new(format!("Trackers ({})", trackers.len()), &HEADER, &WIDTHS)
        .rows(rows)
        .loading(app.trackers.is_loading())
        .empty("No trackers yet", Some(("a", "to create one")))
        .selected(app.row)
        .render(frame, area);

    if let Some(modal) = app.trackers.modal() {
        draw_tracker_form(frame, app, modal, area);
    }

    if let Some(tracker) = app.trackers.pending_delete() {
        draw_delete_confirm(frame, area, "Tracker", &tracker.name, app.trackers.is_deleting());
    }
}

fn draw_tracker_form(frame: &mut Frame, app: &App, modal: &TrackerModal, area: Rect) {
    let title = match modal {
        TrackerModal::Create => "New Tracker".to_string(),
        TrackerModal::Edit(t) => format!("Edit Tracker - {}", t.name),
    };
    let inner = Popup::new(&title, popup::FORM).render(frame, area);
    let rows = form_rows(inner, 3);
    let form = &app.trackers.form;

    let types: Vec<SelectOption> = [TrackerType::Ad, TrackerType::Web]
        .iter()
        .map(|t| SelectOption::new(t.as_ref(), t.as_ref().to_uppercase()))
        .collect();
    let modes: Vec<SelectOption> = [RedirectMode::Http302, RedirectMode::Js]
        .iter()
        .map(|m| SelectOption::new(m.as_ref(), m.label()))
        .collect();
    let statuses: Vec<SelectOption> = [Status::Active, Status::Inactive]
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.as_str()))
        .collect();

    InputField::new("Name", &form.name)
        .active(app.focus.is(0))
        .required()
        .render(frame, rows[0]);

    match modal {
        TrackerModal::Create => {
            SelectField::new("Type", &types, Some(form.kind.as_ref()))
                .active(app.focus.is(1))
                .render(frame, rows[1]);
            SelectField::new("Redirect Mode", &modes, Some(form.mode.as_ref()))
                .active(app.focus.is(2))
                .render(frame, rows[2]);
        }
        TrackerModal::Edit(_) => {
            SelectField::new("Redirect Mode", &modes, Some(form.mode.as_ref()))
                .active(app.focus.is(1))
                .render(frame, rows[1]);
            SelectField::new("Status", &statuses, Some(form.status.as_str()))
                .active(app.focus.is(2))
                .render(frame, rows[2]);
        }
    }

    draw_busy_line(frame, rows[3], app.trackers.is_submitting(), "Saving");
}
