//! Trackers: list, create, edit, delete

use std::sync::Arc;

use super::{PageTask, present, require, task, toast_failure};
use crate::client::TrackerClient;
use crate::context::AppContext;
use crate::models::{CreateTrackerParams, RedirectMode, Status, Tracker, TrackerType, UpdateTrackerParams};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerForm {
    pub name: String,
    /// Only sent on create
    pub kind: TrackerType,
    pub mode: RedirectMode,
    /// Only sent on edit
    pub status: Status,
}

impl TrackerForm {
    fn from_tracker(tracker: &Tracker) -> Self {
        Self {
            name: tracker.name.clone(),
            kind: tracker.kind,
            mode: tracker.mode,
            status: tracker.status.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerModal {
    Create,
    Edit(Tracker),
}

pub struct TrackersPage {
    ctx: Arc<AppContext>,
    trackers: Arc<TrackerClient>,
    pub form: TrackerForm,
    modal: Option<TrackerModal>,
    pending_delete: Option<Tracker>,
}

impl TrackersPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let trackers = Arc::new(TrackerClient::new(ctx.rpc()));
        Self {
            ctx,
            trackers,
            form: TrackerForm::default(),
            modal: None,
            pending_delete: None,
        }
    }

    pub fn load(&self) -> PageTask {
        let trackers = self.trackers.clone();
        task(async move { trackers.fetch().await })
    }

    pub fn trackers(&self) -> Vec<Tracker> {
        self.trackers.items()
    }

    pub fn is_loading(&self) -> bool {
        self.trackers.is_loading()
    }

    pub fn modal(&self) -> Option<&TrackerModal> {
        self.modal.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.trackers.is_creating() || self.trackers.is_updating()
    }

    pub fn open_create(&mut self) {
        self.form = TrackerForm::default();
        self.modal = Some(TrackerModal::Create);
    }

    pub fn open_edit(&mut self, tracker: &Tracker) {
        self.form = TrackerForm::from_tracker(tracker);
        self.modal = Some(TrackerModal::Edit(tracker.clone()));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Submit whichever form is open.
    pub async fn submit(&mut self) -> bool {
        match self.modal {
            Some(TrackerModal::Create) => self.submit_create().await,
            Some(TrackerModal::Edit(_)) => self.submit_edit().await,
            None => false,
        }
    }

    pub async fn submit_create(&mut self) -> bool {
        if !require(&self.ctx, &[("Name", present(&self.form.name))]) {
            return false;
        }
        let params = CreateTrackerParams {
            name: self.form.name.trim().to_string(),
            kind: self.form.kind,
            mode: self.form.mode,
        };
        match self.trackers.create(&params).await {
            Ok(_) => {
                self.ctx.toasts().success("Tracker created");
                self.modal = None;
                self.form = TrackerForm::default();
                self.trackers.fetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }

    pub async fn submit_edit(&mut self) -> bool {
        let Some(TrackerModal::Edit(tracker)) = &self.modal else {
            return false;
        };
        if !require(&self.ctx, &[("Name", present(&self.form.name))]) {
            return false;
        }
        let params = UpdateTrackerParams {
            id: tracker.id.clone(),
            name: self.form.name.trim().to_string(),
            mode: self.form.mode,
            status: self.form.status.clone(),
        };
        match self.trackers.update(&params).await {
            Ok(_) => {
                self.ctx.toasts().success("Tracker updated");
                self.modal = None;
                self.form = TrackerForm::default();
                self.trackers.fetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }

    pub fn request_delete(&mut self, tracker: &Tracker) {
        self.pending_delete = Some(tracker.clone());
    }

    pub fn pending_delete(&self) -> Option<&Tracker> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn is_deleting(&self) -> bool {
        self.trackers.is_deleting()
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(tracker) = self.pending_delete.clone() else {
            return false;
        };
        match self.trackers.delete(&tracker.id).await {
            Ok(_) => {
                self.ctx.toasts().success("Tracker deleted");
                self.pending_delete = None;
                self.trackers.fetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }
}
