//! Read cell for single-object methods (stats)
//!
//! Unlike [`RpcList`](super::RpcList) the failure is kept for display and
//! the previous data is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::rpc::RpcClient;

pub struct RpcQuery<T> {
    rpc: Arc<RpcClient>,
    method: &'static str,
    data: Mutex<Option<T>>,
    error: Mutex<Option<String>>,
    loading: AtomicBool,
    generation: AtomicU64,
}

impl<T> RpcQuery<T>
where
    T: DeserializeOwned + Clone + Send,
{
    pub fn new(rpc: Arc<RpcClient>, method: &'static str) -> Self {
        Self {
            rpc,
            method,
            data: Mutex::new(None),
            error: Mutex::new(None),
            loading: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn data(&self) -> Option<T> {
        self.data.lock().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.lock().clone()
    }

    pub async fn fetch<P>(&self, params: &P)
    where
        P: Serialize + ?Sized + Sync,
    {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.loading.store(true, Ordering::Release);
        *self.error.lock() = None;

        let result = self.rpc.call_with::<_, T>(self.method, params).await;

        if self.generation.load(Ordering::Acquire) != generation {
            debug!(method = self.method, generation, "discarding superseded response");
            return;
        }

        match result {
            Ok(value) => *self.data.lock() = Some(value),
            Err(e) => {
                warn!("{} failed: {}", self.method, e);
                *self.data.lock() = None;
                *self.error.lock() = Some(e.to_string());
            }
        }
        self.loading.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::{MockReply, MockTransport};
    use crate::router::Navigator;
    use crate::session::{AuthStore, MemoryTokenStore};
    use serde_json::{Value, json};

    fn query(mock: Arc<MockTransport>) -> RpcQuery<Value> {
        let auth = Arc::new(AuthStore::new(Arc::new(MemoryTokenStore::default())));
        let rpc = Arc::new(RpcClient::new(mock, auth, Navigator::default()));
        RpcQuery::new(rpc, "admin.stats.clicks")
    }

    #[tokio::test]
    async fn test_error_drops_previous_data() {
        let mock = Arc::new(MockTransport::new());
        mock.once("admin.stats.clicks", MockReply::ok(json!({ "summary": { "total": 3 } })))
            .once("admin.stats.clicks", MockReply::error(500, "aggregation failed"));
        let q = query(mock);

        q.fetch(&json!({})).await;
        assert_eq!(q.data().unwrap()["summary"]["total"], 3);

        q.fetch(&json!({})).await;
        assert!(q.data().is_none());
        assert_eq!(q.error().as_deref(), Some("aggregation failed"));
        assert!(!q.is_loading());
    }
}
