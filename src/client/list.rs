//! Read cell for list methods
//!
//! Failures are swallowed: the list becomes empty and the failure is logged.
//! Every fetch is stamped with a generation; a response that arrives after a
//! newer fetch started is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::rpc::RpcClient;

pub struct RpcList<T> {
    rpc: Arc<RpcClient>,
    method: &'static str,
    data: Mutex<Vec<T>>,
    loading: AtomicBool,
    generation: AtomicU64,
}

impl<T> RpcList<T>
where
    T: DeserializeOwned + Clone + Send,
{
    pub fn new(rpc: Arc<RpcClient>, method: &'static str) -> Self {
        Self {
            rpc,
            method,
            data: Mutex::new(Vec::new()),
            loading: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn items(&self) -> Vec<T> {
        self.data.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }

    /// First item matching the predicate.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.data.lock().iter().find(|item| pred(item)).cloned()
    }

    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.data.lock().clear();
        self.loading.store(false, Ordering::Release);
    }

    pub async fn fetch<P>(&self, params: &P)
    where
        P: Serialize + ?Sized + Sync,
    {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.loading.store(true, Ordering::Release);

        let result = self
            .rpc
            .call_with::<_, Option<Vec<T>>>(self.method, params)
            .await;

        if self.generation.load(Ordering::Acquire) != generation {
            debug!(method = self.method, generation, "discarding superseded list response");
            return;
        }

        let items = match result {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                warn!("{} failed, showing empty list: {}", self.method, e);
                Vec::new()
            }
        };
        *self.data.lock() = items;
        self.loading.store(false, Ordering::Release);
    }
}
