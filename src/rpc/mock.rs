//! Scripted in-process transport
//!
//! Replies are registered per method. Queued (`once`) replies win over the
//! persistent (`on`) reply; unknown methods answer `-32601`.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::protocol::{RpcRequest, RpcResponse};
use super::transport::RpcTransport;
use crate::errors::AdminError;

#[derive(Debug, Clone)]
pub enum MockReply {
    Result(Value),
    Error { code: i64, message: String },
    Transport(String),
    /// Wait (tokio time) before producing the inner reply
    Delayed(Duration, Box<MockReply>),
}

impl MockReply {
    pub fn ok(value: Value) -> Self {
        MockReply::Result(value)
    }

    pub fn error(code: i64, message: impl Into<String>) -> Self {
        MockReply::Error {
            code,
            message: message.into(),
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        MockReply::Delayed(delay, Box::new(self))
    }
}

#[derive(Default)]
pub struct MockTransport {
    queued: Mutex<HashMap<String, VecDeque<MockReply>>>,
    persistent: Mutex<HashMap<String, MockReply>>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply used for every call of `method` once the queue is drained.
    pub fn on(&self, method: &str, reply: MockReply) -> &Self {
        self.persistent.lock().insert(method.to_string(), reply);
        self
    }

    /// Reply used for the next call of `method` only.
    pub fn once(&self, method: &str, reply: MockReply) -> &Self {
        self.queued
            .lock()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().clone()
    }

    pub fn requests_for(&self, method: &str) -> Vec<RpcRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.requests.lock().iter().filter(|r| r.method == method).count()
    }

    fn next_reply(&self, method: &str) -> Option<MockReply> {
        if let Some(reply) = self
            .queued
            .lock()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
        {
            return Some(reply);
        }
        self.persistent.lock().get(method).cloned()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send(&self, request: RpcRequest) -> Result<RpcResponse, AdminError> {
        let id = request.id;
        let method = request.method.clone();
        self.requests.lock().push(request);

        let mut reply = match self.next_reply(&method) {
            Some(reply) => reply,
            None => return Ok(RpcResponse::failure(id, -32601, "Method not found")),
        };

        loop {
            match reply {
                MockReply::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    reply = *inner;
                }
                MockReply::Result(value) => return Ok(RpcResponse::success(id, value)),
                MockReply::Error { code, message } => {
                    return Ok(RpcResponse::failure(id, code, message));
                }
                MockReply::Transport(message) => return Err(AdminError::transport(message)),
            }
        }
    }

    fn name(&self) -> &'static str {
        "Mock"
    }
}
