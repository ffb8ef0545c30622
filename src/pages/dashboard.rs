//! Dashboard: entity counts plus click and event statistics
//!
//! Click stats are scoped by tracker, campaign and channel; event stats by
//! site. Both are fetched together whenever the period or a scope changes and
//! resolve independently.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::{PageTask, SelectOption, cycle_selection, noop, task};
use crate::analytics::{DashboardView, DateRange, Period, TrendMode, today_utc};
use crate::client::{CampaignClient, ChannelClient, SiteClient, StatsClient, TrackerClient};
use crate::context::AppContext;
use crate::models::{ChannelFilter, ClickStatsQuery, EventStatsQuery};

/// Editable start/end of the custom period, `YYYY-MM-DD`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomRange {
    pub start: String,
    pub end: String,
}

/// One of the entity counters above the charts. `count` is `None` while the
/// list is loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCount {
    pub label: &'static str,
    pub count: Option<usize>,
}

impl EntityCount {
    pub fn display(&self) -> String {
        self.count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "...".to_string())
    }
}

pub struct DashboardPage {
    ctx: Arc<AppContext>,
    trackers: Arc<TrackerClient>,
    campaigns: Arc<CampaignClient>,
    channels: Arc<ChannelClient>,
    sites: Arc<SiteClient>,
    stats: Arc<StatsClient>,
    period: Period,
    pub custom: CustomRange,
    tracker_id: Option<String>,
    campaign_id: Option<String>,
    channel_id: Option<String>,
    site_id: Option<String>,
    trend_mode: TrendMode,
}

impl DashboardPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let rpc = ctx.rpc();
        Self {
            trackers: Arc::new(TrackerClient::new(rpc)),
            campaigns: Arc::new(CampaignClient::new(rpc)),
            channels: Arc::new(ChannelClient::new(rpc)),
            sites: Arc::new(SiteClient::new(rpc)),
            stats: Arc::new(StatsClient::new(rpc)),
            ctx,
            period: Period::default(),
            custom: CustomRange::default(),
            tracker_id: None,
            campaign_id: None,
            channel_id: None,
            site_id: None,
            trend_mode: TrendMode::default(),
        }
    }

    /// 拉取四类实体（计数与筛选选项）并加载统计
    pub fn load(&self) -> PageTask {
        let trackers = self.trackers.clone();
        let campaigns = self.campaigns.clone();
        let channels = self.channels.clone();
        let sites = self.sites.clone();
        let refresh = self.refresh();
        task(async move {
            let all_channels = ChannelFilter::default();
            tokio::join!(
                trackers.fetch(),
                campaigns.fetch(None),
                channels.fetch(&all_channels),
                sites.fetch(),
                refresh,
            );
        })
    }

    /// Refetch both stats with the current period and scopes.
    pub fn refresh(&self) -> PageTask {
        let Some((clicks, events)) = self.queries_on(today_utc()) else {
            self.ctx.toasts().warning("Invalid date range");
            return noop();
        };
        debug!(
            "Dashboard refresh {}..{} (tracker={:?}, site={:?})",
            clicks.start_date, clicks.end_date, clicks.tracker_id, events.site_id
        );
        let stats = self.stats.clone();
        task(async move { stats.fetch_both(&clicks, &events).await })
    }

    /// Inclusive range for the current period, `None` for an unusable
    /// custom range.
    pub fn range_on(&self, today: NaiveDate) -> Option<DateRange> {
        match self.period {
            Period::Custom => DateRange::parse(&self.custom.start, &self.custom.end)
                .filter(|r| r.start <= r.end),
            period => period.range_ending(today),
        }
    }

    pub fn queries_on(&self, today: NaiveDate) -> Option<(ClickStatsQuery, EventStatsQuery)> {
        let range = self.range_on(today)?;
        let clicks = ClickStatsQuery {
            start_date: range.start_str(),
            end_date: range.end_str(),
            tracker_id: self.tracker_id.clone(),
            campaign_id: self.campaign_id.clone(),
            channel_id: self.channel_id.clone(),
        };
        let events = EventStatsQuery {
            start_date: range.start_str(),
            end_date: range.end_str(),
            site_id: self.site_id.clone(),
        };
        Some((clicks, events))
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Switching to `Custom` starts from the range that was on screen.
    pub fn set_period(&mut self, period: Period) -> PageTask {
        if period == Period::Custom
            && self.period != Period::Custom
            && let Some(range) = self.range_on(today_utc())
        {
            self.custom = CustomRange {
                start: range.start_str(),
                end: range.end_str(),
            };
        }
        self.period = period;
        self.refresh()
    }

    pub fn cycle_period(&mut self) -> PageTask {
        self.set_period(self.period.cycle())
    }

    pub fn tracker_options(&self) -> Vec<SelectOption> {
        self.trackers
            .items()
            .into_iter()
            .map(|t| SelectOption::new(t.id, t.name))
            .collect()
    }

    pub fn campaign_options(&self) -> Vec<SelectOption> {
        self.campaigns
            .items()
            .into_iter()
            .filter(|c| self.tracker_id.as_deref().is_none_or(|t| c.tracker_id == t))
            .map(|c| SelectOption::new(c.id, c.name))
            .collect()
    }

    pub fn channel_options(&self) -> Vec<SelectOption> {
        self.channels
            .items()
            .into_iter()
            .filter(|c| self.tracker_id.as_deref().is_none_or(|t| c.tracker_id == t))
            .filter(|c| self.campaign_id.as_deref().is_none_or(|id| c.campaign_id == id))
            .map(|c| SelectOption::new(c.id, c.name))
            .collect()
    }

    pub fn site_options(&self) -> Vec<SelectOption> {
        self.sites
            .items()
            .into_iter()
            .map(|s| SelectOption::new(s.id, s.name))
            .collect()
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

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    /// 切换追踪器会清空活动与渠道
    pub fn select_tracker(&mut self, tracker_id: Option<String>) -> PageTask {
        self.tracker_id = tracker_id;
        self.campaign_id = None;
        self.channel_id = None;
        self.refresh()
    }

    pub fn select_campaign(&mut self, campaign_id: Option<String>) -> PageTask {
        self.campaign_id = campaign_id;
        self.channel_id = None;
        self.refresh()
    }

    pub fn select_channel(&mut self, channel_id: Option<String>) -> PageTask {
        self.channel_id = channel_id;
        self.refresh()
    }

    pub fn select_site(&mut self, site_id: Option<String>) -> PageTask {
        self.site_id = site_id;
        self.refresh()
    }

    pub fn cycle_tracker(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.tracker_options(), self.tracker_id(), forward);
        self.select_tracker(next)
    }

    pub fn cycle_campaign(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.campaign_options(), self.campaign_id(), forward);
        self.select_campaign(next)
    }

    pub fn cycle_channel(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.channel_options(), self.channel_id(), forward);
        self.select_channel(next)
    }

    pub fn cycle_site(&mut self, forward: bool) -> PageTask {
        let next = cycle_selection(&self.site_options(), self.site_id(), forward);
        self.select_site(next)
    }

    pub fn trend_mode(&self) -> TrendMode {
        self.trend_mode
    }

    pub fn cycle_trend_mode(&mut self) {
        self.trend_mode = self.trend_mode.cycle();
    }

    pub fn entity_counts(&self) -> [EntityCount; 4] {
        let count = |loading: bool, len: usize| (!loading).then_some(len);
        [
            EntityCount {
                label: "Trackers",
                count: count(self.trackers.is_loading(), self.trackers.items().len()),
            },
            EntityCount {
                label: "Campaigns",
                count: count(self.campaigns.is_loading(), self.campaigns.items().len()),
            },
            EntityCount {
                label: "Sites",
                count: count(self.sites.is_loading(), self.sites.items().len()),
            },
            EntityCount {
                label: "Channels",
                count: count(self.channels.is_loading(), self.channels.items().len()),
            },
        ]
    }

    pub fn view(&self) -> DashboardView {
        let clicks = self.stats.clicks();
        let events = self.stats.events();
        DashboardView::build(clicks.as_ref(), events.as_ref(), self.ctx.view_options())
    }

    pub fn is_loading(&self) -> bool {
        self.stats.is_loading()
    }

    pub fn is_clicks_loading(&self) -> bool {
        self.stats.is_clicks_loading()
    }

    pub fn is_events_loading(&self) -> bool {
        self.stats.is_events_loading()
    }

    /// Errors of the last click and event fetches, in that order
    pub fn errors(&self) -> Vec<String> {
        self.stats
            .clicks_error()
            .into_iter()
            .chain(self.stats.events_error())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;
    use crate::pages::testing::{campaign, channel, signed_in, tracker};
    use crate::rpc::methods;
    use crate::rpc::mock::MockReply;
    use serde_json::json;
    use std::time::Duration;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_preset_ranges() {
        let (ctx, _) = signed_in();
        let mut page = DashboardPage::new(ctx);
        let today = day("2024-03-05");

        let check = |page: &DashboardPage, start: &str| {
            let range = page.range_on(today).unwrap();
            assert_eq!((range.start_str(), range.end_str()), (start.to_string(), "2024-03-05".to_string()));
        };

        assert_eq!(page.period(), Period::Last7Days);
        check(&page, "2024-02-28");
        page.period = Period::Today;
        check(&page, "2024-03-05");
        page.period = Period::Last30Days;
        check(&page, "2024-02-05");
    }

    #[test]
    fn test_custom_range_validation() {
        let (ctx, _) = signed_in();
        let mut page = DashboardPage::new(ctx);
        page.period = Period::Custom;
        let today = day("2024-03-05");

        page.custom = CustomRange { start: "2024-01-01".into(), end: "2024-01-31".into() };
        assert!(page.range_on(today).is_some());

        page.custom = CustomRange { start: "2024-02-01".into(), end: "2024-01-31".into() };
        assert!(page.range_on(today).is_none());

        page.custom = CustomRange { start: "01/02/2024".into(), end: "2024-01-31".into() };
        assert!(page.queries_on(today).is_none());
    }

    #[tokio::test]
    async fn test_invalid_custom_range_skips_fetch() {
        let (ctx, mock) = signed_in();
        let mut page = DashboardPage::new(ctx.clone());
        page.custom = CustomRange { start: "bad".into(), end: "".into() };
        page.period = Period::Custom;

        page.refresh().await;
        assert_eq!(mock.call_count(methods::STATS_CLICKS), 0);
        let toast = ctx.toasts().latest().unwrap();
        assert_eq!((toast.kind, toast.message.as_str()), (ToastKind::Warning, "Invalid date range"));
    }

    #[tokio::test]
    async fn test_switch_to_custom_prefills_range() {
        let (ctx, mock) = signed_in();
        mock.on(methods::STATS_CLICKS, MockReply::ok(json!({})));
        mock.on(methods::STATS_EVENTS, MockReply::ok(json!({})));

        let mut page = DashboardPage::new(ctx);
        page.set_period(Period::Custom).await;
        let expected = Period::Last7Days.range_ending(today_utc()).unwrap();
        assert_eq!(page.custom.start, expected.start_str());
        assert_eq!(page.custom.end, expected.end_str());
        assert_eq!(mock.call_count(methods::STATS_CLICKS), 1);
    }

    #[tokio::test]
    async fn test_scope_cascade_and_queries() {
        let (ctx, mock) = signed_in();
        mock.on(methods::TRACKER_LIST, MockReply::ok(json!([tracker("t1", "Ads", "ad")])));
        mock.on(
            methods::CAMPAIGN_LIST,
            MockReply::ok(json!([campaign("c1", "t1", "A"), campaign("c2", "t2", "B")])),
        );
        mock.on(
            methods::CHANNEL_LIST,
            MockReply::ok(json!([channel("h1", "t1", "c1", "Mail"), channel("h2", "t1", "c2", "Ads")])),
        );
        mock.on(methods::SITE_LIST, MockReply::ok(json!([])));
        mock.on(methods::STATS_CLICKS, MockReply::ok(json!({ "summary": { "total": 5 } })));
        mock.on(methods::STATS_EVENTS, MockReply::ok(json!({ "summary": { "total": 9 } })));

        let mut page = DashboardPage::new(ctx);
        page.load().await;
        let counts = page.entity_counts();
        assert_eq!(counts.map(|c| c.count), [Some(1), Some(2), Some(0), Some(2)]);

        page.select_tracker(Some("t1".into())).await;
        assert_eq!(page.campaign_options(), vec![SelectOption::new("c1", "A")]);
        page.cycle_campaign(true).await;
        page.cycle_channel(true).await;
        assert_eq!(page.channel_id(), Some("h1"));

        page.select_tracker(None).await;
        assert_eq!((page.campaign_id(), page.channel_id()), (None, None));

        let sent = mock.requests_for(methods::STATS_CLICKS);
        assert_eq!(sent[3].params["channel_id"], "h1");
        assert!(sent[4].params.get("campaign_id").is_none());

        let view = page.view();
        assert_eq!(view.cards[0].value, "5");
        assert_eq!(view.cards[3].value, "9");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_resolve_independently() {
        let (ctx, mock) = signed_in();
        mock.on(
            methods::STATS_CLICKS,
            MockReply::ok(json!({ "summary": { "total": 3 } })).delayed(Duration::from_millis(10)),
        );
        mock.on(methods::STATS_EVENTS, MockReply::error(-32603, "events unavailable"));

        let page = DashboardPage::new(ctx);
        page.refresh().await;

        assert!(!page.is_loading());
        assert_eq!(page.errors(), vec!["events unavailable".to_string()]);
        let view = page.view();
        assert_eq!(view.cards[0].value, "3");
        assert_eq!(view.cards[3].value, "-");
    }

    #[test]
    fn test_entity_count_display() {
        let loading = EntityCount { label: "Sites", count: None };
        assert_eq!(loading.display(), "...");
        assert_eq!(EntityCount { label: "Sites", count: Some(4) }.display(), "4");
    }
}
