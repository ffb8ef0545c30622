//! Derived dashboard view built from the two stats payloads

use serde::Serialize;

use super::aggregate::{
    self, HOURS_PER_DAY, HourlyPoint, TrendPoint, merge_name_counts, merge_trends,
    top_n_with_other,
};
use crate::models::{ClickStatsResponse, EventStatsResponse, NameCount, group_name_counts};

pub const DEFAULT_PIE_MAX_ITEMS: usize = 6;
pub const DEFAULT_RANKING_MAX_ITEMS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub pie_max_items: usize,
    pub ranking_max_items: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            pie_max_items: DEFAULT_PIE_MAX_ITEMS,
            ranking_max_items: DEFAULT_RANKING_MAX_ITEMS,
        }
    }
}

/// Which series the combined trend shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendMode {
    Clicks,
    Events,
    /// Both series, stacked
    #[default]
    Both,
}

impl TrendMode {
    pub fn label(&self) -> &'static str {
        match self {
            TrendMode::Clicks => "Clicks",
            TrendMode::Events => "Events",
            TrendMode::Both => "Clicks + Events",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            TrendMode::Clicks => TrendMode::Events,
            TrendMode::Events => TrendMode::Both,
            TrendMode::Both => TrendMode::Clicks,
        }
    }

    pub fn shows_clicks(&self) -> bool {
        matches!(self, TrendMode::Clicks | TrendMode::Both)
    }

    pub fn shows_events(&self) -> bool {
        matches!(self, TrendMode::Events | TrendMode::Both)
    }

    pub fn is_stacked(&self) -> bool {
        matches!(self, TrendMode::Both)
    }

    /// Height of a point under this mode.
    pub fn value(&self, point: &TrendPoint) -> u64 {
        match self {
            TrendMode::Clicks => point.clicks,
            TrendMode::Events => point.events,
            TrendMode::Both => point.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub title: &'static str,
    pub items: Vec<NameCount>,
}

/// Pie-style distribution; `slices` already folded into top N + Other
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub title: &'static str,
    pub slices: Vec<NameCount>,
    pub total: u64,
}

impl Distribution {
    fn new(title: &'static str, merged: Vec<NameCount>, max_items: usize) -> Self {
        let total = merged.iter().map(|n| n.count).sum();
        Self {
            title,
            slices: top_n_with_other(&merged, max_items),
            total,
        }
    }

    pub fn percent(&self, slice: &NameCount) -> u64 {
        aggregate::share_percent(slice.count, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub cards: Vec<SummaryCard>,
    pub trend: Vec<TrendPoint>,
    pub bot_trend: Vec<TrendPoint>,
    pub rankings: Vec<Ranking>,
    pub distributions: Vec<Distribution>,
    pub hourly: Vec<HourlyPoint>,
}

impl DashboardView {
    pub fn build(
        clicks: Option<&ClickStatsResponse>,
        events: Option<&EventStatsResponse>,
        options: ViewOptions,
    ) -> Self {
        let c = |f: fn(&ClickStatsResponse) -> &[NameCount]| clicks.map(f);
        let e = |f: fn(&EventStatsResponse) -> &[NameCount]| events.map(f);

        let cards = vec![
            SummaryCard {
                label: "Total Clicks",
                value: count_or_dash(clicks.map(|s| s.summary.total)),
            },
            SummaryCard {
                label: "Click Visitors",
                value: count_or_dash(clicks.map(|s| s.summary.unique_visitors)),
            },
            SummaryCard {
                label: "Bot Clicks",
                value: clicks
                    .map(|s| with_rate(s.summary.bots, s.summary.total))
                    .unwrap_or_else(dash),
            },
            SummaryCard {
                label: "Total Events",
                value: count_or_dash(events.map(|s| s.summary.total)),
            },
            SummaryCard {
                label: "Event Visitors",
                value: count_or_dash(events.map(|s| s.summary.unique_visitors)),
            },
            SummaryCard {
                label: "Bot Events",
                value: events
                    .map(|s| with_rate(s.summary.bots, s.summary.total))
                    .unwrap_or_else(dash),
            },
        ];

        let top = |items: Vec<NameCount>| -> Vec<NameCount> {
            items.into_iter().take(options.ranking_max_items).collect()
        };
        let grouped = |groups: Option<Vec<NameCount>>| -> Vec<NameCount> {
            let groups = groups.unwrap_or_default();
            top(merge_name_counts(&[Some(groups.as_slice())]))
        };

        let rankings = vec![
            Ranking {
                title: "Countries",
                items: top(merge_name_counts(&[c(|s| s.countries.as_slice()), e(|s| s.countries.as_slice())])),
            },
            Ranking {
                title: "Referrers",
                items: top(merge_name_counts(&[
                    c(|s| s.top_referrers.as_slice()),
                    e(|s| s.top_referrers.as_slice()),
                ])),
            },
            Ranking {
                title: "Trackers",
                items: grouped(clicks.map(|s| group_name_counts(&s.top_trackers))),
            },
            Ranking {
                title: "Campaigns",
                items: grouped(clicks.map(|s| group_name_counts(&s.top_campaigns))),
            },
            Ranking {
                title: "Channels",
                items: grouped(clicks.map(|s| group_name_counts(&s.top_channels))),
            },
            Ranking {
                title: "Pages",
                items: top(merge_name_counts(&[e(|s| s.top_pages.as_slice())])),
            },
            Ranking {
                title: "Event Types",
                items: grouped(events.map(|s| group_name_counts(&s.top_types))),
            },
        ];

        let distributions = vec![
            Distribution::new(
                "Browsers",
                merge_name_counts(&[c(|s| s.browsers.as_slice()), e(|s| s.browsers.as_slice())]),
                options.pie_max_items,
            ),
            Distribution::new(
                "Operating Systems",
                merge_name_counts(&[c(|s| s.oses.as_slice()), e(|s| s.oses.as_slice())]),
                options.pie_max_items,
            ),
            Distribution::new(
                "Languages",
                merge_name_counts(&[c(|s| s.languages.as_slice()), e(|s| s.languages.as_slice())]),
                options.pie_max_items,
            ),
        ];

        let trend = merge_trends(
            clicks.map(|s| s.daily.as_slice()),
            events.map(|s| s.daily.as_slice()),
        );
        let bot_trend = merge_trends(
            clicks.map(|s| s.bot_daily.as_slice()),
            events.map(|s| s.bot_daily.as_slice()),
        );
        let hourly = aggregate::hourly_buckets(
            clicks.map(|s| s.hourly.as_slice()),
            events.map(|s| s.hourly.as_slice()),
        )
        .to_vec();
        debug_assert_eq!(hourly.len(), HOURS_PER_DAY);

        Self {
            cards,
            trend,
            bot_trend,
            rankings,
            distributions,
            hourly,
        }
    }

    pub fn has_hourly_data(&self) -> bool {
        aggregate::has_hourly_data(&self.hourly)
    }

    pub fn ranking(&self, title: &str) -> Option<&Ranking> {
        self.rankings.iter().find(|r| r.title == title)
    }

    pub fn distribution(&self, title: &str) -> Option<&Distribution> {
        self.distributions.iter().find(|d| d.title == title)
    }
}

fn dash() -> String {
    "-".to_string()
}

fn count_or_dash(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(dash)
}

fn with_rate(bots: u64, total: u64) -> String {
    format!("{} ({:.1}%)", bots, aggregate::bot_rate(bots, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateCount, GroupCount, HourlyCount, StatsSummary};

    fn nc(name: &str, count: u64) -> NameCount {
        NameCount::new(name, count)
    }

    fn group(id: &str, name: &str, count: u64) -> GroupCount {
        GroupCount {
            group_id: id.into(),
            name: name.into(),
            count,
        }
    }

    fn sample_clicks() -> ClickStatsResponse {
        ClickStatsResponse {
            summary: StatsSummary {
                total: 200,
                unique_visitors: 150,
                bots: 20,
                ..Default::default()
            },
            daily: vec![DateCount { date: "2024-05-02".into(), count: 120 }],
            hourly: vec![HourlyCount { hour: 9, count: 30 }],
            countries: vec![nc("US", 100), nc("DE", 50)],
            browsers: (0..8).map(|i| nc(&format!("b{}", i), 10 - i)).collect(),
            top_referrers: vec![nc("google.com", 40)],
            top_campaigns: vec![group("c1", "Launch", 90), group("c2", "", 10)],
            ..Default::default()
        }
    }

    fn sample_events() -> EventStatsResponse {
        EventStatsResponse {
            summary: StatsSummary {
                total: 80,
                unique_visitors: 60,
                ..Default::default()
            },
            daily: vec![DateCount { date: "2024-05-01".into(), count: 80 }],
            countries: vec![nc("DE", 70)],
            top_referrers: vec![nc("google.com", 5), nc("bing.com", 3)],
            top_pages: vec![nc("/pricing", 12)],
            top_types: vec![group("pageview", "", 70), group("signup", "", 10)],
            ..Default::default()
        }
    }

    #[test]
    fn test_build_full_view() {
        let clicks = sample_clicks();
        let events = sample_events();
        let view = DashboardView::build(Some(&clicks), Some(&events), ViewOptions::default());

        assert_eq!(view.cards.len(), 6);
        assert_eq!(view.cards[0].value, "200");
        assert_eq!(view.cards[2].value, "20 (10.0%)");
        assert_eq!(view.cards[5].value, "0 (0.0%)");

        assert_eq!(view.rankings.len(), 7);
        assert_eq!(
            view.ranking("Countries").unwrap().items,
            vec![nc("DE", 120), nc("US", 100)]
        );
        assert_eq!(view.ranking("Referrers").unwrap().items[0], nc("google.com", 45));
        assert_eq!(view.ranking("Pages").unwrap().items, vec![nc("/pricing", 12)]);
        assert_eq!(
            view.ranking("Campaigns").unwrap().items,
            vec![nc("Launch", 90), nc("c2", 10)]
        );
        assert_eq!(view.ranking("Event Types").unwrap().items[0], nc("pageview", 70));
        assert!(view.ranking("Trackers").unwrap().items.is_empty());

        let browsers = view.distribution("Browsers").unwrap();
        assert_eq!(browsers.slices.len(), 7);
        assert_eq!(browsers.slices[6], nc("Other", 3 + 4));
        assert_eq!(browsers.total, (3..=10).sum::<u64>());

        assert_eq!(view.trend.len(), 2);
        assert_eq!(view.trend[0].date, "2024-05-01");
        assert_eq!(view.hourly.len(), 24);
        assert!(view.has_hourly_data());
    }

    #[test]
    fn test_build_with_no_data() {
        let view = DashboardView::build(None, None, ViewOptions::default());
        assert!(view.cards.iter().all(|c| c.value == "-"));
        assert!(view.rankings.iter().all(|r| r.items.is_empty()));
        assert!(view.distributions.iter().all(|d| d.slices.is_empty() && d.total == 0));
        assert!(view.trend.is_empty());
        assert!(!view.has_hourly_data());
    }

    #[test]
    fn test_ranking_limit() {
        let clicks = ClickStatsResponse {
            countries: (0..15).map(|i| nc(&format!("c{}", i), 100 - i)).collect(),
            top_channels: (0..15).map(|i| group(&format!("n{}", i), "", 100 - i)).collect(),
            ..Default::default()
        };
        let view = DashboardView::build(
            Some(&clicks),
            None,
            ViewOptions { pie_max_items: 6, ranking_max_items: 10 },
        );
        assert_eq!(view.ranking("Countries").unwrap().items.len(), 10);
        assert_eq!(view.ranking("Channels").unwrap().items.len(), 10);
    }

    #[test]
    fn test_trend_mode_values() {
        let p = TrendPoint { date: "d".into(), clicks: 3, events: 4 };
        assert_eq!(TrendMode::Clicks.value(&p), 3);
        assert_eq!(TrendMode::Events.value(&p), 4);
        assert_eq!(TrendMode::Both.value(&p), 7);
        assert!(TrendMode::Both.is_stacked());
        assert_eq!(TrendMode::Both.cycle(), TrendMode::Clicks);
    }
}
