//! Pure helpers that combine click and event statistics for the dashboard

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{DateCount, HourlyCount, NameCount};

pub const OTHER_LABEL: &str = "Other";
pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HourlyPoint {
    pub hour: u8,
    pub clicks: u64,
    pub events: u64,
}

impl HourlyPoint {
    pub fn total(&self) -> u64 {
        self.clicks + self.events
    }
}

/// One date of two aligned series (clicks/events, or bot clicks/bot events)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub clicks: u64,
    pub events: u64,
}

impl TrendPoint {
    pub fn total(&self) -> u64 {
        self.clicks + self.events
    }
}

/// Sum counts per name across sources, largest first.
///
/// Absent sources contribute nothing. Equal counts keep first-seen order.
pub fn merge_name_counts(sources: &[Option<&[NameCount]>]) -> Vec<NameCount> {
    let mut merged: Vec<NameCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in sources.iter().flatten().flat_map(|items| items.iter()) {
        match index.get(item.name.as_str()) {
            Some(&pos) => merged[pos].count += item.count,
            None => {
                index.insert(item.name.as_str(), merged.len());
                merged.push(item.clone());
            }
        }
    }

    // sort_by is stable
    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged
}

/// Dense 24-hour distribution. Hours outside 0..=23 are ignored; repeated
/// hours within one series are summed.
pub fn hourly_buckets(
    clicks: Option<&[HourlyCount]>,
    events: Option<&[HourlyCount]>,
) -> [HourlyPoint; HOURS_PER_DAY] {
    let mut buckets: [HourlyPoint; HOURS_PER_DAY] = std::array::from_fn(|h| HourlyPoint {
        hour: h as u8,
        clicks: 0,
        events: 0,
    });

    let valid = |entry: &&HourlyCount| (0..HOURS_PER_DAY as i64).contains(&entry.hour);

    for entry in clicks.unwrap_or_default().iter().filter(valid) {
        buckets[entry.hour as usize].clicks += entry.count;
    }
    for entry in events.unwrap_or_default().iter().filter(valid) {
        buckets[entry.hour as usize].events += entry.count;
    }
    buckets
}

pub fn has_hourly_data(buckets: &[HourlyPoint]) -> bool {
    buckets.iter().any(|b| b.total() > 0)
}

/// Align two date series on the union of their dates, ascending, missing
/// values as zero.
pub fn merge_trends(clicks: Option<&[DateCount]>, events: Option<&[DateCount]>) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for entry in clicks.unwrap_or_default() {
        by_date.entry(entry.date.as_str()).or_default().0 += entry.count;
    }
    for entry in events.unwrap_or_default() {
        by_date.entry(entry.date.as_str()).or_default().1 += entry.count;
    }

    by_date
        .into_iter()
        .map(|(date, (clicks, events))| TrendPoint {
            date: date.to_string(),
            clicks,
            events,
        })
        .collect()
}

/// First `max_items` entries plus an `Other` bucket holding the rest.
///
/// The bucket is only added when the remainder is non-zero.
pub fn top_n_with_other(items: &[NameCount], max_items: usize) -> Vec<NameCount> {
    if items.len() <= max_items {
        return items.to_vec();
    }

    let mut top = items[..max_items].to_vec();
    let rest: u64 = items[max_items..].iter().map(|i| i.count).sum();
    if rest > 0 {
        top.push(NameCount::new(OTHER_LABEL, rest));
    }
    top
}

/// Rounded percentage of `count` in `total`; 0 when `total` is 0.
pub fn share_percent(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u64
}

/// Bot share in percent with one decimal place of precision kept.
pub fn bot_rate(bots: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (bots as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Per-date bot rate of a trend pair (`clicks` = bots, `events` = totals).
pub fn bot_rate_series(bots: &[DateCount], totals: &[DateCount]) -> Vec<(String, f64)> {
    merge_trends(Some(bots), Some(totals))
        .into_iter()
        .map(|p| {
            let rate = bot_rate(p.clicks, p.events);
            (p.date, rate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nc(name: &str, count: u64) -> NameCount {
        NameCount::new(name, count)
    }

    fn dc(date: &str, count: u64) -> DateCount {
        DateCount {
            date: date.into(),
            count,
        }
    }

    #[test]
    fn test_merge_name_counts_sums_and_sorts() {
        let a = [nc("Chrome", 5), nc("Firefox", 2)];
        let b = [nc("Firefox", 4), nc("Safari", 1)];
        let merged = merge_name_counts(&[Some(&a), Some(&b)]);
        assert_eq!(merged, vec![nc("Firefox", 6), nc("Chrome", 5), nc("Safari", 1)]);
    }

    #[test]
    fn test_merge_name_counts_ties_keep_first_seen() {
        let a = [nc("b", 3), nc("a", 3)];
        let b = [nc("c", 3)];
        let merged = merge_name_counts(&[Some(&a), None, Some(&b)]);
        let names: Vec<_> = merged.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_merge_name_counts_all_absent() {
        assert!(merge_name_counts(&[None, None]).is_empty());
    }

    #[test]
    fn test_hourly_buckets_dense_and_ignores_out_of_range() {
        let clicks = [
            HourlyCount { hour: 0, count: 2 },
            HourlyCount { hour: 23, count: 1 },
            HourlyCount { hour: 24, count: 99 },
            HourlyCount { hour: -1, count: 99 },
        ];
        let events = [HourlyCount { hour: 23, count: 5 }];
        let buckets = hourly_buckets(Some(&clicks), Some(&events));

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[0], HourlyPoint { hour: 0, clicks: 2, events: 0 });
        assert_eq!(buckets[23], HourlyPoint { hour: 23, clicks: 1, events: 5 });
        let total: u64 = buckets.iter().map(|b| b.total()).sum();
        assert_eq!(total, 8);
        assert!(has_hourly_data(&buckets));
    }

    #[test]
    fn test_hourly_buckets_empty() {
        let buckets = hourly_buckets(None, None);
        assert!(buckets.iter().enumerate().all(|(i, b)| b.hour as usize == i));
        assert!(!has_hourly_data(&buckets));
    }

    #[test]
    fn test_merge_trends_union_ascending() {
        let clicks = [dc("2024-05-03", 4), dc("2024-05-01", 1)];
        let events = [dc("2024-05-02", 7), dc("2024-05-03", 2)];
        let merged = merge_trends(Some(&clicks), Some(&events));

        let dates: Vec<_> = merged.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
        assert_eq!((merged[1].clicks, merged[1].events), (0, 7));
        assert_eq!((merged[2].clicks, merged[2].events), (4, 2));
    }

    #[test]
    fn test_top_n_with_other() {
        let items = [nc("a", 5), nc("b", 3), nc("c", 2), nc("d", 1)];
        assert_eq!(
            top_n_with_other(&items, 2),
            vec![nc("a", 5), nc("b", 3), nc(OTHER_LABEL, 3)]
        );
        assert_eq!(top_n_with_other(&items, 4), items.to_vec());
        assert_eq!(top_n_with_other(&items, 10), items.to_vec());
    }

    #[test]
    fn test_top_n_without_other_when_rest_is_zero() {
        let items = [nc("a", 5), nc("b", 0), nc("c", 0)];
        assert_eq!(top_n_with_other(&items, 1), vec![nc("a", 5)]);
    }

    #[test]
    fn test_share_percent_rounding() {
        assert_eq!(share_percent(1, 3), 33);
        assert_eq!(share_percent(2, 3), 67);
        assert_eq!(share_percent(1, 0), 0);
    }

    #[test]
    fn test_bot_rate() {
        assert_eq!(bot_rate(1, 3), 33.3);
        assert_eq!(bot_rate(0, 0), 0.0);
        let series = bot_rate_series(&[dc("2024-05-01", 5)], &[dc("2024-05-01", 20)]);
        assert_eq!(series, vec![("2024-05-01".to_string(), 25.0)]);
    }
}
