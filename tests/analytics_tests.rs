//! 统计聚合集成测试

mod common;

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use tracklink_admin::analytics::aggregate::{
    HOURS_PER_DAY, OTHER_LABEL, hourly_buckets, merge_name_counts, merge_trends,
    top_n_with_other,
};
use tracklink_admin::analytics::{DashboardView, ViewOptions};
use tracklink_admin::models::{
    ClickStatsResponse, DateCount, EventStatsResponse, HourlyCount, NameCount,
};

use common::{click_stats, event_stats};

fn fixtures() -> (ClickStatsResponse, EventStatsResponse) {
    (
        serde_json::from_value(click_stats()).unwrap(),
        serde_json::from_value(event_stats()).unwrap(),
    )
}

#[test]
fn test_dashboard_combines_both_sources() {
    let (clicks, events) = fixtures();
    let view = DashboardView::build(Some(&clicks), Some(&events), ViewOptions::default());

    let dates: Vec<_> = view.trend.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, ["2024-05-01", "2024-05-02", "2024-05-03"]);
    assert_eq!((view.trend[1].clicks, view.trend[1].events), (70, 10));
    assert_eq!((view.trend[2].clicks, view.trend[2].events), (0, 30));

    let countries = view.ranking("Countries").unwrap();
    assert_eq!(countries.items[0], NameCount::new("US", 90));
    assert_eq!(countries.items[1], NameCount::new("DE", 70));

    let browsers = view.distribution("Browsers").unwrap();
    assert_eq!(browsers.total, 160);
    assert_eq!(browsers.slices[0], NameCount::new("Firefox", 90));
    assert_eq!(browsers.slices[1], NameCount::new("Chrome", 70));

    assert_eq!(view.hourly.len(), HOURS_PER_DAY);
    assert_eq!((view.hourly[9].clicks, view.hourly[9].events), (100, 5));
    assert!(view.has_hourly_data());
}

#[test]
fn test_dashboard_with_missing_source() {
    let (clicks, _) = fixtures();
    let view = DashboardView::build(Some(&clicks), None, ViewOptions::default());

    let events_card = view.cards.iter().find(|c| c.label == "Total Events").unwrap();
    assert_eq!(events_card.value, "-");
    assert!(view.trend.iter().all(|p| p.events == 0));
    assert!(view.ranking("Pages").unwrap().items.is_empty());
}

#[test]
fn test_dashboard_with_nothing_loaded() {
    let view = DashboardView::build(None, None, ViewOptions::default());
    assert!(view.cards.iter().all(|c| c.value == "-"));
    assert!(view.trend.is_empty());
    assert!(!view.has_hourly_data());
}

#[test]
fn test_pie_folds_tail_into_other() {
    let (mut clicks, _) = fixtures();
    clicks.oses = (0..10).map(|i| NameCount::new(format!("os{}", i), 10 - i)).collect();

    let options = ViewOptions {
        pie_max_items: 3,
        ..ViewOptions::default()
    };
    let view = DashboardView::build(Some(&clicks), None, options);
    let os = view.distribution("Operating Systems").unwrap();

    assert_eq!(os.slices.len(), 4);
    assert_eq!(os.slices[3], NameCount::new(OTHER_LABEL, 7 + 6 + 5 + 4 + 3 + 2 + 1));
}

#[test]
fn test_dashboard_reads_backend_summary_and_groups() {
    let (clicks, events) = fixtures();
    let view = DashboardView::build(Some(&clicks), Some(&events), ViewOptions::default());

    let card = |label: &str| view.cards.iter().find(|c| c.label == label).unwrap().value.clone();
    assert_eq!(card("Total Clicks"), "120");
    assert_eq!(card("Click Visitors"), "80");
    assert_eq!(card("Bot Clicks"), "12 (10.0%)");
    assert_eq!(card("Event Visitors"), "25");

    assert_eq!(view.bot_trend.len(), 1);
    assert_eq!(view.bot_trend[0].clicks, 12);
    assert_eq!(view.ranking("Referrers").unwrap().items[0], NameCount::new("google.com", 50));
    assert_eq!(view.ranking("Campaigns").unwrap().items[0], NameCount::new("Launch", 90));
    assert_eq!(view.ranking("Channels").unwrap().items[0], NameCount::new("Newsletter", 60));
    assert_eq!(view.ranking("Trackers").unwrap().items[0], NameCount::new("Spring", 120));
    assert_eq!(view.ranking("Event Types").unwrap().items[0], NameCount::new("pageview", 40));
    assert_eq!(view.ranking("Pages").unwrap().items[0], NameCount::new("/pricing", 40));

    let os = view.distribution("Operating Systems").unwrap();
    assert_eq!(os.slices[0], NameCount::new("iOS", 110));
    assert_eq!(os.total, 160);
}

#[test]
fn test_merge_browser_counts_across_sources() {
    let clicks = [NameCount::new("Chrome", 10)];
    let events = [NameCount::new("Chrome", 5), NameCount::new("Firefox", 3)];

    let merged = merge_name_counts(&[Some(clicks.as_slice()), Some(events.as_slice())]);

    assert_eq!(
        merged,
        vec![NameCount::new("Chrome", 15), NameCount::new("Firefox", 3)]
    );
}

#[test]
fn test_top_two_folds_rest_into_other() {
    let items = [
        NameCount::new("A", 50),
        NameCount::new("B", 30),
        NameCount::new("C", 15),
        NameCount::new("D", 5),
    ];

    assert_eq!(
        top_n_with_other(&items, 2),
        vec![
            NameCount::new("A", 50),
            NameCount::new("B", 30),
            NameCount::new(OTHER_LABEL, 20),
        ]
    );
}

fn name_counts() -> impl Strategy<Value = Vec<NameCount>> {
    prop::collection::vec(("[a-e]", 0u64..1_000), 0..20)
        .prop_map(|v| v.into_iter().map(|(n, c)| NameCount::new(n, c)).collect())
}

fn date_counts() -> impl Strategy<Value = Vec<DateCount>> {
    prop::collection::vec((1u32..=28, 0u64..1_000), 0..20).prop_map(|v| {
        v.into_iter()
            .map(|(d, count)| DateCount {
                date: format!("2024-05-{:02}", d),
                count,
            })
            .collect()
    })
}

fn sums_by_name<'a>(lists: impl IntoIterator<Item = &'a [NameCount]>) -> BTreeMap<String, u64> {
    let mut sums = BTreeMap::new();
    for item in lists.into_iter().flatten() {
        *sums.entry(item.name.clone()).or_insert(0) += item.count;
    }
    sums
}

proptest! {
    #[test]
    fn prop_merge_sums_each_name_and_sorts(a in name_counts(), b in name_counts()) {
        let merged = merge_name_counts(&[Some(a.as_slice()), Some(b.as_slice()), None]);
        prop_assert!(merged.windows(2).all(|w| w[0].count >= w[1].count));

        // 每个名称只出现一次，且计数等于各输入之和
        let expected = sums_by_name([a.as_slice(), b.as_slice()]);
        prop_assert_eq!(merged.len(), expected.len());
        for item in &merged {
            prop_assert_eq!(expected.get(&item.name), Some(&item.count));
        }
    }

    #[test]
    fn prop_top_n_folds_exact_tail(items in name_counts(), max in 1usize..8) {
        let merged = merge_name_counts(&[Some(items.as_slice())]);
        let folded = top_n_with_other(&merged, max);

        if merged.len() <= max {
            prop_assert_eq!(&folded, &merged);
        } else {
            let tail: u64 = merged[max..].iter().map(|n| n.count).sum();
            prop_assert_eq!(&folded[..max], &merged[..max]);
            if tail > 0 {
                prop_assert_eq!(folded.len(), max + 1);
                prop_assert_eq!(&folded[max], &NameCount::new(OTHER_LABEL, tail));
            } else {
                prop_assert_eq!(folded.len(), max);
            }
        }
    }

    #[test]
    fn prop_trend_is_date_union(a in date_counts(), b in date_counts()) {
        let trend = merge_trends(Some(a.as_slice()), Some(b.as_slice()));
        prop_assert!(trend.windows(2).all(|w| w[0].date < w[1].date));

        let distinct: BTreeSet<&str> = a.iter().chain(&b).map(|d| d.date.as_str()).collect();
        prop_assert_eq!(trend.len(), distinct.len());

        // 缺失日期按 0 补齐
        for point in &trend {
            let clicks: u64 = a.iter().filter(|d| d.date == point.date).map(|d| d.count).sum();
            let events: u64 = b.iter().filter(|d| d.date == point.date).map(|d| d.count).sum();
            prop_assert_eq!((point.clicks, point.events), (clicks, events));
        }
    }

    #[test]
    fn prop_hourly_is_dense(hours in prop::collection::vec((-5i64..30, 0u64..100), 0..40)) {
        let entries: Vec<HourlyCount> =
            hours.iter().map(|&(hour, count)| HourlyCount { hour, count }).collect();
        let buckets = hourly_buckets(Some(entries.as_slice()), None);

        prop_assert_eq!(buckets.len(), HOURS_PER_DAY);
        for (i, b) in buckets.iter().enumerate() {
            prop_assert_eq!(b.hour as usize, i);
            let expected: u64 = entries
                .iter()
                .filter(|e| e.hour == i as i64)
                .map(|e| e.count)
                .sum();
            prop_assert_eq!(b.clicks, expected);
            prop_assert_eq!(b.events, 0);
        }
    }
}
