//! Channels: cascading tracker/campaign filters, create with tags, JSON import

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::{PageTask, SelectOption, cycle_selection, present, require, task, toast_failure};
use crate::client::{CampaignClient, ChannelClient, TrackerClient};
use crate::context::AppContext;
use crate::models::{Campaign, Channel, ChannelFilter, CreateChannelParams};
use crate::utils::short_id;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRow {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelForm {
    pub tracker_id: Option<String>,
    pub campaign_id: Option<String>,
    pub name: String,
    pub source: String,
    pub medium: String,
    pub tags: Vec<TagRow>,
}

impl ChannelForm {
    pub fn add_tag_row(&mut self) {
        self.tags.push(TagRow::default());
    }

    pub fn remove_tag_row(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Rows with an empty key are dropped; a repeated key keeps the last value.
    pub fn tags_map(&self) -> BTreeMap<String, String> {
        self.tags
            .iter()
            .filter(|row| !row.key.trim().is_empty())
            .map(|row| (row.key.trim().to_string(), row.value.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelModal {
    Create,
    Import,
}

pub struct ChannelsPage {
    ctx: Arc<AppContext>,
    trackers: Arc<TrackerClient>,
    campaigns: Arc<CampaignClient>,
    channels: Arc<ChannelClient>,
    filter_tracker: Option<String>,
    filter_campaign: Option<String>,
    pub form: ChannelForm,
    pub import_json: String,
    modal: Option<ChannelModal>,
}

impl ChannelsPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let trackers = Arc::new(TrackerClient::new(ctx.rpc()));
        let campaigns = Arc::new(CampaignClient::new(ctx.rpc()));
        let channels = Arc::new(ChannelClient::new(ctx.rpc()));
        Self {
            ctx,
            trackers,
            campaigns,
            channels,
            filter_tracker: None,
            filter_campaign: None,
            form: ChannelForm::default(),
            import_json: String::new(),
            modal: None,
        }
    }

    pub fn load(&self) -> PageTask {
        let trackers = self.trackers.clone();
        let campaigns = self.campaigns.clone();
        let scope = self.filter_tracker.clone();
        let refetch = self.refetch();
        task(async move {
            let campaign_fetch = async {
                if scope.is_some() {
                    campaigns.fetch(scope).await;
                }
            };
            tokio::join!(trackers.fetch(), campaign_fetch, refetch);
        })
    }

    fn filter(&self) -> ChannelFilter {
        ChannelFilter {
            tracker_id: self.filter_tracker.clone(),
            campaign_id: self.filter_campaign.clone(),
        }
    }

    fn refetch(&self) -> PageTask {
        let channels = self.channels.clone();
        let filter = self.filter();
        task(async move { channels.fetch(&filter).await })
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.channels.items()
    }

    pub fn is_loading(&self) -> bool {
        self.channels.is_loading()
    }

    pub fn tracker_options(&self) -> Vec<SelectOption> {
        self.trackers
            .items()
            .into_iter()
            .map(|t| SelectOption::new(t.id, t.name))
            .collect()
    }

    fn campaign_options_for(&self, tracker_id: Option<&str>) -> Vec<SelectOption> {
        self.campaigns
            .items()
            .into_iter()
            .filter(|c: &Campaign| tracker_id.is_none_or(|t| c.tracker_id == t))
            .map(|c| SelectOption::new(c.id, c.name))
            .collect()
    }

    /// Campaigns under the filter tracker (all when no tracker is chosen)
    pub fn filter_campaign_options(&self) -> Vec<SelectOption> {
        self.campaign_options_for(self.filter_tracker.as_deref())
    }

    /// Campaigns under the tracker chosen in the create form
    pub fn form_campaign_options(&self) -> Vec<SelectOption> {
        self.campaign_options_for(self.form.tracker_id.as_deref())
    }

    pub fn tracker_name(&self, id: &str) -> String {
        self.trackers
            .get(id)
            .map(|t| t.name)
            .unwrap_or_else(|| short_id(id).to_string())
    }

    pub fn campaign_name(&self, id: &str) -> String {
        self.campaigns
            .get(id)
            .map(|c| c.name)
            .unwrap_or_else(|| short_id(id).to_string())
    }

    pub fn filter_tracker(&self) -> Option<&str> {
        self.filter_tracker.as_deref()
    }

    pub fn filter_campaign(&self) -> Option<&str> {
        self.filter_campaign.as_deref()
    }

    /// Changing the tracker clears the campaign filter.
    pub fn set_filter_tracker(&mut self, tracker_id: Option<String>) -> PageTask {
        self.filter_tracker = tracker_id;
        self.filter_campaign = None;

        let campaigns = self.campaigns.clone();
        let scope = self.filter_tracker.clone();
        let refetch = self.refetch();
        task(async move {
            let campaign_fetch = async {
                if scope.is_some() {
                    campaigns.fetch(scope).await;
                }
            };
            tokio::join!(campaign_fetch, refetch);
        })
    }

    pub fn set_filter_campaign(&mut self, campaign_id: Option<String>) -> PageTask {
        self.filter_campaign = campaign_id;
        self.refetch()
    }

    pub fn cycle_filter_tracker(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.tracker_options(), self.filter_tracker(), forward);
        self.set_filter_tracker(next)
    }

    pub fn cycle_filter_campaign(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.filter_campaign_options(), self.filter_campaign(), forward);
        self.set_filter_campaign(next)
    }

    pub fn modal(&self) -> Option<ChannelModal> {
        self.modal
    }

    pub fn open_create(&mut self) {
        self.form = ChannelForm::default();
        self.modal = Some(ChannelModal::Create);
    }

    pub fn open_import(&mut self) {
        self.modal = Some(ChannelModal::Import);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Form tracker changed: the campaign is reset and campaigns refetched.
    pub fn select_form_tracker(&mut self, tracker_id: Option<String>) -> PageTask {
        self.form.tracker_id = tracker_id.clone();
        self.form.campaign_id = None;
        let campaigns = self.campaigns.clone();
        task(async move {
            if tracker_id.is_some() {
                campaigns.fetch(tracker_id).await;
            }
        })
    }

    pub fn cycle_form_tracker(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.tracker_options(), self.form.tracker_id.as_deref(), forward);
        self.select_form_tracker(next)
    }

    pub fn cycle_form_campaign(&mut self, forward: bool) {
        self.form.campaign_id = cycle_selection(
            &self.form_campaign_options(),
            self.form.campaign_id.as_deref(),
            forward,
        );
    }

    pub fn is_creating(&self) -> bool {
        self.channels.is_creating()
    }

    pub fn is_importing(&self) -> bool {
        self.channels.is_importing()
    }

    pub async fn submit_create(&mut self) -> bool {
        let ok = require(
            &self.ctx,
            &[
                ("Tracker", self.form.tracker_id.is_some()),
                ("Campaign", self.form.campaign_id.is_some()),
                ("Name", present(&self.form.name)),
            ],
        );
        let (Some(tracker_id), Some(campaign_id)) =
            (self.form.tracker_id.clone(), self.form.campaign_id.clone())
        else {
            return false;
        };
        if !ok {
            return false;
        }

        let params = CreateChannelParams {
            tracker_id,
            campaign_id,
            name: self.form.name.trim().to_string(),
            source: self.form.source.trim().to_string(),
            medium: self.form.medium.trim().to_string(),
            tags: self.form.tags_map(),
        };
        match self.channels.create(&params).await {
            Ok(_) => {
                self.ctx.toasts().success("Channel created");
                self.modal = None;
                self.form = ChannelForm::default();
                self.refetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }

    /// Import a JSON array of channel objects. Anything that is not a JSON
    /// array is rejected locally.
    pub async fn submit_import(&mut self) -> bool {
        let channels = match serde_json::from_str::<Value>(self.import_json.trim()) {
            Ok(Value::Array(items)) => items,
            other => {
                debug!("Rejected channel import payload: {:?}", other.err());
                self.ctx.toasts().error("Invalid JSON");
                return false;
            }
        };

        match self.channels.batch_import(channels).await {
            Ok(imported) => {
                self.ctx
                    .toasts()
                    .success(format!("Imported {} channels", imported));
                self.modal = None;
                self.import_json.clear();
                self.refetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }
}
