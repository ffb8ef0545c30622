//! Write cell: one RPC method with loading/error state, errors returned to the caller

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::AdminError;
use crate::rpc::RpcClient;

/// Clears the loading flag on every exit path, including cancellation.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct RpcCall<T> {
    rpc: Arc<RpcClient>,
    method: &'static str,
    loading: AtomicBool,
    error: Mutex<Option<String>>,
    _result: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> RpcCall<T> {
    pub fn new(rpc: Arc<RpcClient>, method: &'static str) -> Self {
        Self {
            rpc,
            method,
            loading: AtomicBool::new(false),
            error: Mutex::new(None),
            _result: PhantomData,
        }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Display message of the last failure, cleared when a new call starts.
    pub fn error(&self) -> Option<String> {
        self.error.lock().clone()
    }

    pub async fn execute<P>(&self, params: &P) -> Result<T, AdminError>
    where
        P: Serialize + ?Sized + Sync,
    {
        self.loading.store(true, Ordering::Release);
        *self.error.lock() = None;
        let _guard = LoadingGuard(&self.loading);

        let result = self.rpc.call_with(self.method, params).await;
        if let Err(e) = &result {
            *self.error.lock() = Some(e.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::{MockReply, MockTransport};
    use crate::router::Navigator;
    use crate::session::{AuthStore, MemoryTokenStore};
    use serde_json::{Value, json};
    use std::time::Duration;

    fn rpc(mock: Arc<MockTransport>) -> Arc<RpcClient> {
        let auth = Arc::new(AuthStore::new(Arc::new(MemoryTokenStore::new(Some("t".into())))));
        Arc::new(RpcClient::new(mock, auth, Navigator::default()))
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let mock = Arc::new(MockTransport::new());
        mock.once("m", MockReply::error(1, "boom"))
            .once("m", MockReply::ok(json!({ "id": "x" })));
        let call: RpcCall<Value> = RpcCall::new(rpc(mock), "m");

        assert!(call.execute(&json!({})).await.is_err());
        assert_eq!(call.error().as_deref(), Some("boom"));

        let value = call.execute(&json!({})).await.unwrap();
        assert_eq!(value["id"], "x");
        assert_eq!(call.error(), None);
        assert!(!call.is_loading());
    }

    #[tokio::test]
    async fn test_loading_cleared_after_failure() {
        let mock = Arc::new(MockTransport::new());
        mock.on("m", MockReply::Transport("down".into()));
        let call: RpcCall<Value> = RpcCall::new(rpc(mock), "m");

        let err = call.execute(&json!({})).await.unwrap_err();
        assert!(matches!(err, AdminError::Transport(_)));
        assert!(!call.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_visible_while_in_flight() {
        let mock = Arc::new(MockTransport::new());
        mock.on("m", MockReply::ok(json!(1)).delayed(Duration::from_millis(100)));
        let call: Arc<RpcCall<Value>> = Arc::new(RpcCall::new(rpc(mock), "m"));

        let task = tokio::spawn({
            let call = call.clone();
            async move { call.execute(&json!({})).await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(call.is_loading());

        task.await.unwrap().unwrap();
        assert!(!call.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_cleared_when_cancelled() {
        let mock = Arc::new(MockTransport::new());
        mock.on("m", MockReply::ok(json!(1)).delayed(Duration::from_secs(10)));
        let call: Arc<RpcCall<Value>> = Arc::new(RpcCall::new(rpc(mock), "m"));

        let task = tokio::spawn({
            let call = call.clone();
            async move { call.execute(&json!({})).await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(call.is_loading());

        task.abort();
        let _ = task.await;
        assert!(!call.is_loading());
    }
}
