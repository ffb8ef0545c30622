//! Analytics payloads returned by `admin.stats.clicks` / `admin.stats.events`

use serde::{Deserialize, Serialize};

use super::entities::null_as_default;

/// A named bucket in a distribution (country, browser, referrer, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

impl NameCount {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: i64,
    pub count: u64,
}

/// One day of a trend series; `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: String,
    pub count: u64,
}

/// Top-N bucket keyed by an entity id (`top_campaigns`, `top_sites`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupCount {
    pub group_id: String,
    pub name: String,
    pub count: u64,
}

impl GroupCount {
    /// 名称为空时（实体已删除或未命名）退回到 id
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.group_id
        } else {
            &self.name
        }
    }
}

/// Folds grouped buckets into name counts for ranking.
pub fn group_name_counts(groups: &[GroupCount]) -> Vec<NameCount> {
    groups
        .iter()
        .map(|g| NameCount::new(g.label(), g.count))
        .collect()
}

/// `summary` object of both stats payloads; `unique_sessions` is event-only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSummary {
    pub total: u64,
    pub unique_visitors: u64,
    pub unique_sessions: u64,
    pub bots: u64,
    pub bot_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickStatsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: StatsSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub daily: Vec<DateCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub bot_daily: Vec<DateCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub hourly: Vec<HourlyCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_trackers: Vec<GroupCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_campaigns: Vec<GroupCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_channels: Vec<GroupCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_referrers: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub browsers: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub oses: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub countries: Vec<NameCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventStatsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: StatsSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub daily: Vec<DateCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub bot_daily: Vec<DateCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub hourly: Vec<HourlyCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_sites: Vec<GroupCount>,
    /// 按事件类型分组，`group_id` 即类型名
    #[serde(deserialize_with = "null_as_default")]
    pub top_types: Vec<GroupCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_referrers: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_pages: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub browsers: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub oses: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<NameCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub countries: Vec<NameCount>,
}

/// Parameters of `admin.stats.clicks`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClickStatsQuery {
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

/// Parameters of `admin.stats.events`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventStatsQuery {
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_click_stats_missing_fields_default() {
        let stats: ClickStatsResponse = serde_json::from_value(
            json!({ "summary": { "total": 12 }, "countries": null, "hourly": null }),
        )
        .unwrap();
        assert_eq!(stats.summary.total, 12);
        assert!(stats.countries.is_empty());
        assert!(stats.daily.is_empty());
    }

    #[test]
    fn test_click_stats_backend_payload() {
        let stats: ClickStatsResponse = serde_json::from_value(json!({
            "summary": { "total": 120, "unique_visitors": 80, "bots": 12, "bot_rate": 0.1 },
            "daily": [{ "date": "2024-05-01", "count": 120 }],
            "bot_daily": [{ "date": "2024-05-01", "count": 12 }],
            "top_trackers": [{ "group_id": "t1", "name": "Spring", "count": 120 }],
            "top_campaigns": [{ "group_id": "c1", "name": "Launch", "count": 90 }],
            "top_channels": [{ "group_id": "n1", "name": "", "count": 30 }],
            "top_referrers": [{ "name": "google.com", "count": 50 }],
            "browsers": [], "oses": [{ "name": "iOS", "count": 70 }],
            "languages": [], "countries": [], "hourly": [{ "hour": 9, "count": 40 }]
        }))
        .unwrap();
        assert_eq!(stats.summary.total, 120);
        assert_eq!(stats.summary.bots, 12);
        assert_eq!(stats.daily.len(), 1);
        assert_eq!(stats.bot_daily[0].count, 12);
        assert_eq!(stats.oses[0].name, "iOS");
        assert_eq!(stats.top_referrers[0].count, 50);
        assert_eq!(
            group_name_counts(&stats.top_channels),
            vec![NameCount::new("n1", 30)]
        );
        assert_eq!(stats.top_campaigns[0].label(), "Launch");
    }

    #[test]
    fn test_event_stats_backend_payload() {
        let stats: EventStatsResponse = serde_json::from_value(json!({
            "summary": { "total": 40, "unique_visitors": 25, "unique_sessions": 30, "bots": 2, "bot_rate": 0.05 },
            "daily": [{ "date": "2024-05-02", "count": 40 }],
            "top_sites": [{ "group_id": "s1", "name": "Docs", "count": 40 }],
            "top_types": [{ "group_id": "pageview", "name": "", "count": 35 }],
            "top_pages": [{ "name": "/pricing", "count": 12 }],
            "bot_daily": null
        }))
        .unwrap();
        assert_eq!(stats.summary.unique_sessions, 30);
        assert_eq!(stats.top_pages[0].name, "/pricing");
        assert_eq!(stats.top_types[0].label(), "pageview");
        assert!(stats.bot_daily.is_empty());
    }

    #[test]
    fn test_event_stats_from_empty_object() {
        let stats: EventStatsResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats, EventStatsResponse::default());
    }

    #[test]
    fn test_click_query_skips_unset_scopes() {
        let query = ClickStatsQuery {
            start_date: "2024-05-01".into(),
            end_date: "2024-05-07".into(),
            tracker_id: Some("t1".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({ "start_date": "2024-05-01", "end_date": "2024-05-07", "tracker_id": "t1" })
        );
    }
}
