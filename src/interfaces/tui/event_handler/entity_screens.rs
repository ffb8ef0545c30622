//! Event handlers for the entity list screens
//!
//! Handles: Trackers, Campaigns, Targets, Sites

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::list_navigation;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::input_handler::{edit_text, select_step};
use crate::pages::{SiteModal, TrackerModal};

const TRACKER_FIELDS: usize = 3;
const TWO_FIELDS: usize = 2;

// ---------------------------------------------------------------------------
// Trackers
// ---------------------------------------------------------------------------

pub fn tracker_text(app: &mut App) -> Option<&mut String> {
    (app.trackers.modal().is_some() && app.focus.is(0)).then_some(&mut app.trackers.form.name)
}

pub async fn handle_trackers_screen(app: &mut App, key: KeyEvent) {
    if app.trackers.pending_delete().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if app.trackers.confirm_delete().await {
                    let len = app.trackers.trackers().len();
                    app.move_row(0, len);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.trackers.cancel_delete(),
            _ => {}
        }
        return;
    }

    if let Some(modal) = app.trackers.modal().cloned() {
        handle_tracker_modal(app, key, &modal).await;
        return;
    }

    let items = app.trackers.trackers();
    if list_navigation(app, &key, items.len()) {
        return;
    }
    match key.code {
        KeyCode::Char('a') => {
            app.trackers.open_create();
            app.focus.reset();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(tracker) = items.get(app.row) {
                app.trackers.open_edit(tracker);
                app.focus.reset();
            }
        }
        KeyCode::Char('d') => {
            if let Some(tracker) = items.get(app.row) {
                app.trackers.request_delete(tracker);
            }
        }
        KeyCode::Char('r') => app.spawn(app.trackers.load()),
        _ => {}
    }
}

async fn handle_tracker_modal(app: &mut App, key: KeyEvent, modal: &TrackerModal) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus.next(TRACKER_FIELDS),
        KeyCode::BackTab | KeyCode::Up => app.focus.prev(TRACKER_FIELDS),
        KeyCode::Esc => app.trackers.close_modal(),
        KeyCode::Enter => {
            if !app.trackers.is_submitting() && app.trackers.submit().await {
                app.focus.reset();
            }
        }
        _ if app.focus.is(0) => {
            if let Some(buffer) = tracker_text(app) {
                edit_text(buffer, &key);
            }
        }
        _ => {
            if select_step(&key).is_none() {
                return;
            }
            let form = &mut app.trackers.form;
            match (modal, app.focus.index()) {
                (TrackerModal::Create, 1) => form.kind = form.kind.cycle(),
                (TrackerModal::Create, _) | (TrackerModal::Edit(_), 1) => {
                    form.mode = form.mode.cycle()
                }
                (TrackerModal::Edit(_), _) => form.status = form.status.toggle(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

pub fn campaign_text(app: &mut App) -> Option<&mut String> {
    (app.campaigns.is_create_open() && app.focus.is(1)).then_some(&mut app.campaigns.form.name)
}

pub async fn handle_campaigns_screen(app: &mut App, key: KeyEvent) {
    if app.campaigns.is_create_open() {
        match key.code {
            KeyCode::Tab | KeyCode::Down => app.focus.next(TWO_FIELDS),
            KeyCode::BackTab | KeyCode::Up => app.focus.prev(TWO_FIELDS),
            KeyCode::Esc => app.campaigns.close_create(),
            KeyCode::Enter => {
                if !app.campaigns.is_creating() && app.campaigns.submit_create().await {
                    app.focus.reset();
                }
            }
            _ if app.focus.is(0) => {
                if let Some(forward) = select_step(&key) {
                    app.campaigns.cycle_form_tracker(forward);
                }
            }
            _ => {
                if let Some(buffer) = campaign_text(app) {
                    edit_text(buffer, &key);
                }
            }
        }
        return;
    }

    let len = app.campaigns.campaigns().len();
    if list_navigation(app, &key, len) {
        return;
    }
    match key.code {
        KeyCode::Char('a') => {
            app.campaigns.open_create();
            app.focus.reset();
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            let task = app.campaigns.cycle_filter_tracker(key.code == KeyCode::Char('f'));
            app.row = 0;
            app.spawn(task);
        }
        KeyCode::Char('r') => app.spawn(app.campaigns.load()),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

pub fn target_text(app: &mut App) -> Option<&mut String> {
    (app.targets.is_create_open() && app.focus.is(1)).then_some(&mut app.targets.form.url)
}

pub async fn handle_targets_screen(app: &mut App, key: KeyEvent) {
    if app.targets.is_create_open() {
        match key.code {
            KeyCode::Tab | KeyCode::Down => app.focus.next(TWO_FIELDS),
            KeyCode::BackTab | KeyCode::Up => app.focus.prev(TWO_FIELDS),
            KeyCode::Esc => app.targets.close_create(),
            KeyCode::Enter => {
                if !app.targets.is_creating() && app.targets.submit_create().await {
                    app.focus.reset();
                }
            }
            _ if app.focus.is(0) => {
                if let Some(forward) = select_step(&key) {
                    app.targets.cycle_form_tracker(forward);
                }
            }
            _ => {
                if let Some(buffer) = target_text(app) {
                    edit_text(buffer, &key);
                }
            }
        }
        return;
    }

    let items = app.targets.targets();
    if list_navigation(app, &key, items.len()) {
        return;
    }
    match key.code {
        KeyCode::Char('a') => {
            app.targets.open_create();
            app.focus.reset();
        }
        KeyCode::Char('y') => {
            if let Some(target) = items.get(app.row) {
                app.copy(&target.url, "URL");
            }
        }
        KeyCode::Char('r') => app.spawn(app.targets.load()),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

pub fn site_text(app: &mut App) -> Option<&mut String> {
    if !matches!(app.sites.modal(), Some(SiteModal::Create)) {
        return None;
    }
    match app.focus.index() {
        0 => Some(&mut app.sites.form.name),
        _ => Some(&mut app.sites.form.domain),
    }
}

pub async fn handle_sites_screen(app: &mut App, key: KeyEvent) {
    match app.sites.modal().cloned() {
        Some(SiteModal::Created(site)) => match key.code {
            KeyCode::Char('y') => app.copy(&site.site_key, "Site key"),
            KeyCode::Esc | KeyCode::Enter => app.sites.close_modal(),
            _ => {}
        },
        Some(SiteModal::Create) => match key.code {
            KeyCode::Tab | KeyCode::Down => app.focus.next(TWO_FIELDS),
            KeyCode::BackTab | KeyCode::Up => app.focus.prev(TWO_FIELDS),
            KeyCode::Esc => app.sites.close_modal(),
            KeyCode::Enter => {
                if !app.sites.is_creating() {
                    app.sites.submit_create().await;
                }
            }
            _ => {
                if let Some(buffer) = site_text(app) {
                    edit_text(buffer, &key);
                }
            }
        },
        None => {
            let len = app.sites.sites().len();
            if list_navigation(app, &key, len) {
                return;
            }
            match key.code {
                KeyCode::Char('a') => {
                    app.sites.open_create();
                    app.focus.reset();
                }
                KeyCode::Char('r') => app.spawn(app.sites.load()),
                _ => {}
            }
        }
    }
}
