//! Targets: destination URLs per tracker

use std::sync::Arc;

use super::{PageTask, SelectOption, cycle_selection, present, require, task, toast_failure};
use crate::client::{TargetClient, TrackerClient};
use crate::context::AppContext;
use crate::models::{CreateTargetParams, Target};
use crate::utils::short_id;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetForm {
    pub tracker_id: Option<String>,
    pub url: String,
}

pub struct TargetsPage {
    ctx: Arc<AppContext>,
    trackers: Arc<TrackerClient>,
    targets: Arc<TargetClient>,
    pub form: TargetForm,
    create_open: bool,
}

impl TargetsPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let trackers = Arc::new(TrackerClient::new(ctx.rpc()));
        let targets = Arc::new(TargetClient::new(ctx.rpc()));
        Self {
            ctx,
            trackers,
            targets,
            form: TargetForm::default(),
            create_open: false,
        }
    }

    pub fn load(&self) -> PageTask {
        let trackers = self.trackers.clone();
        let targets = self.targets.clone();
        task(async move {
            tokio::join!(trackers.fetch(), targets.fetch(None));
        })
    }

    pub fn targets(&self) -> Vec<Target> {
        self.targets.items()
    }

    pub fn is_loading(&self) -> bool {
        self.targets.is_loading()
    }

    pub fn tracker_options(&self) -> Vec<SelectOption> {
        self.trackers
            .items()
            .into_iter()
            .map(|t| SelectOption::new(t.id, t.name))
            .collect()
    }

    pub fn tracker_name(&self, id: &str) -> String {
        self.trackers
            .get(id)
            .map(|t| t.name)
            .unwrap_or_else(|| short_id(id).to_string())
    }

    pub fn is_create_open(&self) -> bool {
        self.create_open
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    pub fn cycle_form_tracker(&mut self, forward: bool) {
        self.form.tracker_id =
            cycle_selection(&self.tracker_options(), self.form.tracker_id.as_deref(), forward);
    }

    pub fn is_creating(&self) -> bool {
        self.targets.is_creating()
    }

    pub async fn submit_create(&mut self) -> bool {
        let ok = require(
            &self.ctx,
            &[
                ("Tracker", self.form.tracker_id.is_some()),
                ("URL", present(&self.form.url)),
            ],
        );
        let Some(tracker_id) = self.form.tracker_id.clone().filter(|_| ok) else {
            return false;
        };

        let params = CreateTargetParams {
            tracker_id,
            url: self.form.url.trim().to_string(),
        };
        match self.targets.create(&params).await {
            Ok(_) => {
                self.ctx.toasts().success("Target created");
                self.create_open = false;
                self.form = TargetForm::default();
                self.targets.fetch(None).await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }
}
