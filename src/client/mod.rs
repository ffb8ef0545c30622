//! Client layer for pages, the TUI and the CLI
//!
//! Every backend method is wrapped in a state cell that screens can poll
//! while a request is in flight.
//!
//! # Architecture
//!
//! ```text
//! pages / CLI → entity clients ──→ RpcList  (reads)  ─┐
//!                               ├→ RpcQuery (stats)  ─┼→ RpcClient → RpcTransport
//!                               └→ RpcCall  (writes) ─┘
//! ```
//!
//! # Error Policy
//!
//! - `RpcList`: failure → empty list, logged at `warn`, nothing returned
//! - `RpcQuery`: failure → no data, message kept in `error()`
//! - `RpcCall`: failure → message kept in `error()` **and** returned

mod call;
mod list;
mod query;

mod campaigns;
mod channels;
mod sites;
mod stats;
mod targets;
mod tokens;
mod trackers;

pub use call::RpcCall;
pub use list::RpcList;
pub use query::RpcQuery;

pub use campaigns::CampaignClient;
pub use channels::ChannelClient;
pub use sites::SiteClient;
pub use stats::StatsClient;
pub use targets::TargetClient;
pub use tokens::TokenClient;
pub use trackers::TrackerClient;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::models::{ClickStatsQuery, EventStatsQuery, TrackerFilter};
    use crate::router::Navigator;
    use crate::rpc::mock::{MockReply, MockTransport};
    use crate::rpc::{RpcClient, methods};
    use crate::session::{AuthStore, MemoryTokenStore};

    fn rpc(mock: &Arc<MockTransport>) -> Arc<RpcClient> {
        let auth = Arc::new(AuthStore::new(Arc::new(MemoryTokenStore::new(Some("tok".into())))));
        Arc::new(RpcClient::new(mock.clone(), auth, Navigator::default()))
    }

    #[tokio::test]
    async fn test_tracker_client_delete_sends_id() {
        let mock = Arc::new(MockTransport::new());
        mock.on(methods::TRACKER_DELETE, MockReply::ok(json!({ "ok": true })));
        let client = TrackerClient::new(&rpc(&mock));

        let result = client.delete("t-9").await.unwrap();

        assert!(result.ok);
        let sent = mock.requests_for(methods::TRACKER_DELETE);
        assert_eq!(sent[0].params["id"], "t-9");
        assert_eq!(sent[0].params["admin_token"], "tok");
    }

    #[tokio::test]
    async fn test_campaign_fetch_filter_param() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            methods::CAMPAIGN_LIST,
            MockReply::ok(json!([
                { "id": "c1", "tracker_id": "t1", "name": "A" },
                { "id": "c2", "tracker_id": "t2", "name": "B" }
            ])),
        );
        let client = CampaignClient::new(&rpc(&mock));

        client.fetch(None).await;
        client.fetch(Some("t1".into())).await;

        let sent = mock.requests_for(methods::CAMPAIGN_LIST);
        assert!(!sent[0].params.contains_key("tracker_id"));
        assert_eq!(sent[1].params["tracker_id"], "t1");
        assert_eq!(client.for_tracker("t2").len(), 1);
        assert_eq!(
            serde_json::to_value(TrackerFilter::new(None)).unwrap(),
            json!({})
        );
    }

    #[tokio::test]
    async fn test_channel_batch_import_returns_count() {
        let mock = Arc::new(MockTransport::new());
        mock.on(methods::CHANNEL_BATCH_IMPORT, MockReply::ok(json!({ "imported": 3 })));
        let client = ChannelClient::new(&rpc(&mock));

        let imported = client
            .batch_import(vec![json!({ "name": "a" }), json!({ "name": "b" }), json!({ "name": "c" })])
            .await
            .unwrap();

        assert_eq!(imported, 3);
        let sent = mock.requests_for(methods::CHANNEL_BATCH_IMPORT);
        assert_eq!(sent[0].params["channels"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_fetch_concurrently_with_independent_state() {
        let mock = Arc::new(MockTransport::new());
        mock.on(
            methods::STATS_CLICKS,
            MockReply::ok(json!({ "summary": { "total": 10 } })).delayed(Duration::from_millis(100)),
        )
        .on(
            methods::STATS_EVENTS,
            MockReply::error(500, "events unavailable").delayed(Duration::from_millis(100)),
        );
        let stats = StatsClient::new(&rpc(&mock));

        let start = tokio::time::Instant::now();
        stats
            .fetch_both(&ClickStatsQuery::default(), &EventStatsQuery::default())
            .await;

        // concurrent: both 100ms replies finish together
        assert!(start.elapsed() < Duration::from_millis(150));
        assert_eq!(stats.clicks().map(|c| c.summary.total), Some(10));
        assert!(stats.events().is_none());
        assert_eq!(stats.events_error().as_deref(), Some("events unavailable"));
        assert!(stats.clicks_error().is_none());
        assert!(!stats.is_loading());
    }
}
