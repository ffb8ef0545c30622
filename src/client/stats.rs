use std::sync::Arc;

use super::RpcQuery;
use crate::models::{ClickStatsQuery, ClickStatsResponse, EventStatsQuery, EventStatsResponse};
use crate::rpc::{RpcClient, methods};

/// Click and event statistics, each with its own loading flag and error.
pub struct StatsClient {
    clicks: RpcQuery<ClickStatsResponse>,
    events: RpcQuery<EventStatsResponse>,
}

impl StatsClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            clicks: RpcQuery::new(rpc.clone(), methods::STATS_CLICKS),
            events: RpcQuery::new(rpc.clone(), methods::STATS_EVENTS),
        }
    }

    pub async fn fetch_clicks(&self, query: &ClickStatsQuery) {
        self.clicks.fetch(query).await
    }

    pub async fn fetch_events(&self, query: &EventStatsQuery) {
        self.events.fetch(query).await
    }

    /// Both requests run concurrently; neither waits for or cancels the other.
    pub async fn fetch_both(&self, clicks: &ClickStatsQuery, events: &EventStatsQuery) {
        tokio::join!(self.fetch_clicks(clicks), self.fetch_events(events));
    }

    pub fn clicks(&self) -> Option<ClickStatsResponse> {
        self.clicks.data()
    }

    pub fn events(&self) -> Option<EventStatsResponse> {
        self.events.data()
    }

    pub fn clicks_error(&self) -> Option<String> {
        self.clicks.error()
    }

    pub fn events_error(&self) -> Option<String> {
        self.events.error()
    }

    pub fn is_clicks_loading(&self) -> bool {
        self.clicks.is_loading()
    }

    pub fn is_events_loading(&self) -> bool {
        self.events.is_loading()
    }

    pub fn is_loading(&self) -> bool {
        self.is_clicks_loading() || self.is_events_loading()
    }
}
