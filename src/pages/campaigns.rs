//! Campaigns: tracker-scoped list and create
//!
//! Campaigns only exist under ad trackers, so both the filter and the create
//! form offer ad trackers only.

use std::sync::Arc;

use super::{PageTask, SelectOption, cycle_selection, present, require, task, toast_failure};
use crate::client::{CampaignClient, TrackerClient};
use crate::context::AppContext;
use crate::models::{Campaign, CreateCampaignParams, TrackerType};
use crate::utils::short_id;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub tracker_id: Option<String>,
    pub name: String,
}

pub struct CampaignsPage {
    ctx: Arc<AppContext>,
    trackers: Arc<TrackerClient>,
    campaigns: Arc<CampaignClient>,
    filter_tracker: Option<String>,
    pub form: CampaignForm,
    create_open: bool,
}

impl CampaignsPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let trackers = Arc::new(TrackerClient::new(ctx.rpc()));
        let campaigns = Arc::new(CampaignClient::new(ctx.rpc()));
        Self {
            ctx,
            trackers,
            campaigns,
            filter_tracker: None,
            form: CampaignForm::default(),
            create_open: false,
        }
    }

    pub fn load(&self) -> PageTask {
        let trackers = self.trackers.clone();
        let refetch = self.refetch();
        task(async move {
            tokio::join!(trackers.fetch(), refetch);
        })
    }

    fn refetch(&self) -> PageTask {
        let campaigns = self.campaigns.clone();
        let filter = self.filter_tracker.clone();
        task(async move { campaigns.fetch(filter).await })
    }

    pub fn campaigns(&self) -> Vec<Campaign> {
        self.campaigns.items()
    }

    pub fn is_loading(&self) -> bool {
        self.campaigns.is_loading()
    }

    pub fn tracker_options(&self) -> Vec<SelectOption> {
        self.trackers
            .items()
            .into_iter()
            .filter(|t| t.kind == TrackerType::Ad)
            .map(|t| SelectOption::new(t.id, t.name))
            .collect()
    }

    /// Name of the owning tracker, or an id prefix until trackers arrive.
    pub fn tracker_name(&self, id: &str) -> String {
        self.trackers
            .get(id)
            .map(|t| t.name)
            .unwrap_or_else(|| short_id(id).to_string())
    }

    pub fn filter_tracker(&self) -> Option<&str> {
        self.filter_tracker.as_deref()
    }

    pub fn set_filter_tracker(&mut self, tracker_id: Option<String>) -> PageTask {
        self.filter_tracker = tracker_id;
        self.refetch()
    }

    pub fn cycle_filter_tracker(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.tracker_options(), self.filter_tracker(), forward);
        self.set_filter_tracker(next)
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
        self.campaigns.is_creating()
    }

    pub async fn submit_create(&mut self) -> bool {
        let ok = require(
            &self.ctx,
            &[
                ("Tracker", self.form.tracker_id.is_some()),
                ("Name", present(&self.form.name)),
            ],
        );
        let Some(tracker_id) = self.form.tracker_id.clone().filter(|_| ok) else {
            return false;
        };

        let params = CreateCampaignParams {
            tracker_id,
            name: self.form.name.trim().to_string(),
        };
        match self.campaigns.create(&params).await {
            Ok(_) => {
                self.ctx.toasts().success("Campaign created");
                self.create_open = false;
                self.form = CampaignForm::default();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{campaign, signed_in, tracker};
    use crate::rpc::methods;
    use crate::rpc::mock::MockReply;
    use serde_json::json;

    #[tokio::test]
    async fn test_only_ad_trackers_offered() {
        let (ctx, mock) = signed_in();
        mock.on(
            methods::TRACKER_LIST,
            MockReply::ok(json!([tracker("t1", "Ads", "ad"), tracker("t2", "Site", "web")])),
        );
        mock.on(methods::CAMPAIGN_LIST, MockReply::ok(json!([])));

        let page = CampaignsPage::new(ctx);
        page.load().await;

        let options = page.tracker_options();
        assert_eq!(options, vec![SelectOption::new("t1", "Ads")]);
        assert_eq!(page.tracker_name("t2"), "Site");
        assert_eq!(page.tracker_name("0123456789"), "01234567");
    }

    #[tokio::test]
    async fn test_filter_refetches_with_tracker() {
        let (ctx, mock) = signed_in();
        mock.on(methods::TRACKER_LIST, MockReply::ok(json!([tracker("t1", "Ads", "ad")])));
        mock.on(methods::CAMPAIGN_LIST, MockReply::ok(json!([campaign("c1", "t1", "Launch")])));

        let mut page = CampaignsPage::new(ctx);
        page.load().await;
        assert!(mock.requests_for(methods::CAMPAIGN_LIST)[0].params.get("tracker_id").is_none());

        page.cycle_filter_tracker(true).await;
        assert_eq!(page.filter_tracker(), Some("t1"));
        let sent = mock.requests_for(methods::CAMPAIGN_LIST);
        assert_eq!(sent[1].params["tracker_id"], "t1");
        assert_eq!(page.campaigns().len(), 1);
    }

    #[tokio::test]
    async fn test_create_refetches_with_current_filter() {
        let (ctx, mock) = signed_in();
        mock.on(methods::CAMPAIGN_CREATE, MockReply::ok(campaign("c9", "t1", "Summer")));
        mock.on(methods::CAMPAIGN_LIST, MockReply::ok(json!([campaign("c9", "t1", "Summer")])));

        let mut page = CampaignsPage::new(ctx.clone());
        page.set_filter_tracker(Some("t1".into())).await;
        page.open_create();
        page.form.tracker_id = Some("t1".into());
        page.form.name = "Summer".into();

        assert!(page.submit_create().await);
        assert!(!page.is_create_open());
        assert_eq!(page.form, CampaignForm::default());
        let lists = mock.requests_for(methods::CAMPAIGN_LIST);
        assert_eq!(lists.last().unwrap().params["tracker_id"], "t1");
        assert_eq!(ctx.toasts().latest().unwrap().message, "Campaign created");
    }

    #[tokio::test]
    async fn test_create_requires_tracker() {
        let (ctx, mock) = signed_in();
        let mut page = CampaignsPage::new(ctx.clone());
        page.form.name = "Orphan".into();

        assert!(!page.submit_create().await);
        assert_eq!(mock.call_count(methods::CAMPAIGN_CREATE), 0);
        assert_eq!(ctx.toasts().latest().unwrap().message, "Tracker is required");
    }
}
