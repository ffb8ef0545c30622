//! 集成测试共享工具

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};

use tracklink_admin::config::StaticConfig;
use tracklink_admin::context::AppContext;
use tracklink_admin::rpc::mock::MockTransport;
use tracklink_admin::session::{MemoryTokenStore, TokenStore};

pub fn context_with(store: Arc<dyn TokenStore>) -> (Arc<AppContext>, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    let ctx = AppContext::new(Arc::new(StaticConfig::default()), mock.clone(), store);
    (ctx, mock)
}

pub fn signed_in() -> (Arc<AppContext>, Arc<MockTransport>) {
    context_with(Arc::new(MemoryTokenStore::new(Some("tok".into()))))
}

pub fn signed_out() -> (Arc<AppContext>, Arc<MockTransport>) {
    context_with(Arc::new(MemoryTokenStore::new(None)))
}

pub fn tracker(id: &str, name: &str, kind: &str) -> Value {
    json!({ "id": id, "type": kind, "name": name, "mode": "302", "status": "active",
            "created_at": "2024-05-01T10:00:00Z", "updated_at": "2024-05-01T10:00:00Z" })
}

pub fn campaign(id: &str, tracker_id: &str, name: &str) -> Value {
    json!({ "id": id, "tracker_id": tracker_id, "name": name, "status": "active" })
}

pub fn channel(id: &str, tracker_id: &str, campaign_id: &str, name: &str) -> Value {
    json!({ "id": id, "tracker_id": tracker_id, "campaign_id": campaign_id, "name": name,
            "source": "newsletter", "medium": "email", "tags": { "utm": "x" } })
}

pub fn target(id: &str, tracker_id: &str, url: &str) -> Value {
    json!({ "id": id, "tracker_id": tracker_id, "url": url })
}

pub fn token(id: &str, code: &str) -> Value {
    json!({ "id": id, "short_code": code, "tracker_id": "t1", "campaign_id": "",
            "channel_id": "", "target_id": "g1", "mode": "302",
            "tracking_url": format!("https://trk.example/{}", code) })
}

pub fn click_stats() -> Value {
    json!({
        "summary": { "total": 120, "unique_visitors": 80, "bots": 12, "bot_rate": 0.1 },
        "daily": [
            { "date": "2024-05-01", "count": 50 },
            { "date": "2024-05-02", "count": 70 }
        ],
        "bot_daily": [{ "date": "2024-05-01", "count": 12 }],
        "top_trackers": [{ "group_id": "t1", "name": "Spring", "count": 120 }],
        "top_campaigns": [{ "group_id": "c1", "name": "Launch", "count": 90 }],
        "top_channels": [{ "group_id": "n1", "name": "Newsletter", "count": 60 }],
        "top_referrers": [{ "name": "google.com", "count": 45 }],
        "hourly": [{ "hour": 9, "count": 100 }, { "hour": 23, "count": 20 }],
        "countries": [{ "name": "DE", "count": 70 }, { "name": "US", "count": 50 }],
        "browsers": [{ "name": "Firefox", "count": 90 }, { "name": "Chrome", "count": 30 }],
        "oses": [{ "name": "iOS", "count": 70 }, { "name": "Android", "count": 50 }],
        "languages": []
    })
}

pub fn event_stats() -> Value {
    json!({
        "summary": { "total": 40, "unique_visitors": 25, "unique_sessions": 30, "bots": 0, "bot_rate": 0 },
        "daily": [
            { "date": "2024-05-02", "count": 10 },
            { "date": "2024-05-03", "count": 30 }
        ],
        "bot_daily": [],
        "top_sites": [{ "group_id": "s1", "name": "Docs", "count": 40 }],
        "top_types": [{ "group_id": "pageview", "name": "", "count": 40 }],
        "top_referrers": [{ "name": "google.com", "count": 5 }],
        "top_pages": [{ "name": "/pricing", "count": 40 }],
        "hourly": [{ "hour": 9, "count": 5 }],
        "countries": [{ "name": "US", "count": 40 }],
        "browsers": [{ "name": "Chrome", "count": 40 }],
        "oses": [{ "name": "iOS", "count": 40 }]
    })
}
