//! Token generator: tracker → campaign → channel → target, then generate
//!
//! Each parent selection resets everything below it so the submitted
//! combination is always consistent. Nothing is kept between visits.

use std::sync::Arc;

use super::{PageTask, SelectOption, cycle_selection, noop, task, toast_failure};
use crate::client::{CampaignClient, ChannelClient, TargetClient, TokenClient, TrackerClient};
use crate::context::AppContext;
use crate::models::{ChannelFilter, GenerateTokenParams, RedirectMode, Token};
use crate::router::Route;

pub struct TokenGeneratorPage {
    ctx: Arc<AppContext>,
    trackers: Arc<TrackerClient>,
    campaigns: Arc<CampaignClient>,
    channels: Arc<ChannelClient>,
    targets: Arc<TargetClient>,
    tokens: Arc<TokenClient>,
    tracker_id: Option<String>,
    campaign_id: Option<String>,
    channel_id: Option<String>,
    target_id: Option<String>,
    mode: RedirectMode,
    generated: Option<Token>,
}

impl TokenGeneratorPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let rpc = ctx.rpc();
        Self {
            trackers: Arc::new(TrackerClient::new(rpc)),
            campaigns: Arc::new(CampaignClient::new(rpc)),
            channels: Arc::new(ChannelClient::new(rpc)),
            targets: Arc::new(TargetClient::new(rpc)),
            tokens: Arc::new(TokenClient::new(rpc)),
            ctx,
            tracker_id: None,
            campaign_id: None,
            channel_id: None,
            target_id: None,
            mode: RedirectMode::default(),
            generated: None,
        }
    }

    pub fn load(&self) -> PageTask {
        let trackers = self.trackers.clone();
        task(async move { trackers.fetch().await })
    }

    pub fn tracker_id(&self) -> Option<&str> {
        self.tracker_id.as_deref()
    }

    pub fn campaign_id(&self) -> Option<&str> {
        self.campaign_id.as_deref()
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn mode(&self) -> RedirectMode {
        self.mode
    }

    pub fn tracker_options(&self) -> Vec<SelectOption> {
        self.trackers
            .items()
            .into_iter()
            .map(|t| SelectOption::new(t.id, format!("{} ({})", t.name, t.kind)))
            .collect()
    }

    pub fn campaign_options(&self) -> Vec<SelectOption> {
        let Some(tracker_id) = self.tracker_id.as_deref() else {
            return Vec::new();
        };
        self.campaigns
            .for_tracker(tracker_id)
            .into_iter()
            .map(|c| SelectOption::new(c.id, c.name))
            .collect()
    }

    pub fn channel_options(&self) -> Vec<SelectOption> {
        let Some(campaign_id) = self.campaign_id.as_deref() else {
            return Vec::new();
        };
        self.channels
            .for_campaign(campaign_id)
            .into_iter()
            .map(|c| SelectOption::new(c.id, c.name))
            .collect()
    }

    pub fn target_options(&self) -> Vec<SelectOption> {
        let Some(tracker_id) = self.tracker_id.as_deref() else {
            return Vec::new();
        };
        self.targets
            .for_tracker(tracker_id)
            .into_iter()
            .map(|t| SelectOption::new(t.id, t.url))
            .collect()
    }

    pub fn is_loading_options(&self) -> bool {
        self.trackers.is_loading()
            || self.campaigns.is_loading()
            || self.channels.is_loading()
            || self.targets.is_loading()
    }

    /// 切换追踪器：清空下级选择，重新拉取活动与目标
    pub fn select_tracker(&mut self, tracker_id: Option<String>) -> PageTask {
        self.tracker_id = tracker_id.clone();
        self.campaign_id = None;
        self.channel_id = None;
        self.target_id = None;
        self.channels.clear();

        let campaigns = self.campaigns.clone();
        let targets = self.targets.clone();
        if tracker_id.is_none() {
            campaigns.clear();
            targets.clear();
            return noop();
        }
        task(async move {
            tokio::join!(campaigns.fetch(tracker_id.clone()), targets.fetch(tracker_id));
        })
    }

    pub fn select_campaign(&mut self, campaign_id: Option<String>) -> PageTask {
        self.campaign_id = campaign_id.clone();
        self.channel_id = None;

        let channels = self.channels.clone();
        let Some(campaign_id) = campaign_id else {
            channels.clear();
            return noop();
        };
        let filter = ChannelFilter {
            tracker_id: self.tracker_id.clone(),
            campaign_id: Some(campaign_id),
        };
        task(async move { channels.fetch(&filter).await })
    }

    pub fn select_channel(&mut self, channel_id: Option<String>) {
        self.channel_id = channel_id;
    }

    pub fn select_target(&mut self, target_id: Option<String>) {
        self.target_id = target_id;
    }

    pub fn cycle_tracker(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.tracker_options(), self.tracker_id(), forward);
        self.select_tracker(next)
    }

    pub fn cycle_campaign(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.campaign_options(), self.campaign_id(), forward);
        self.select_campaign(next)
    }

    pub fn cycle_channel(&mut self, forward: bool) {
        self.channel_id = cycle_selection(&self.channel_options(), self.channel_id(), forward);
    }

    pub fn cycle_target(&mut self, forward: bool) {
        self.target_id = cycle_selection(&self.target_options(), self.target_id(), forward);
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.cycle();
    }

    pub fn can_generate(&self) -> bool {
        self.tracker_id.is_some() && self.target_id.is_some()
    }

    pub fn is_generating(&self) -> bool {
        self.tokens.is_generating()
    }

    pub async fn generate(&mut self) -> bool {
        let (Some(tracker_id), Some(target_id)) = (self.tracker_id.clone(), self.target_id.clone())
        else {
            self.ctx.toasts().warning("Tracker and target are required");
            return false;
        };

        let params = GenerateTokenParams {
            tracker_id,
            campaign_id: self.campaign_id.clone(),
            channel_id: self.channel_id.clone(),
            target_id,
            mode: self.mode,
        };
        match self.tokens.generate(&params).await {
            Ok(token) => {
                self.ctx.toasts().success("Token generated");
                self.generated = Some(token);
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }

    /// Last generated token, shown once with copy shortcuts
    pub fn generated(&self) -> Option<&Token> {
        self.generated.as_ref()
    }

    pub fn view_all(&self) {
        self.ctx.navigate(Route::Tokens);
    }
}
