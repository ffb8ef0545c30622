//! RPC 传输层
//!
//! `RpcTransport` 抽象一次 JSON-RPC 往返；`HttpTransport` 使用 ureq 同步 Agent，
//! 在 `spawn_blocking` 中执行，避免阻塞 tokio 工作线程。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{trace, warn};
use ureq::Agent;
use url::Url;

use super::protocol::{RpcRequest, RpcResponse};
use crate::errors::AdminError;

/// One JSON-RPC round trip. Implementations never retry.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, request: RpcRequest) -> Result<RpcResponse, AdminError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// HTTPS POST transport against a single endpoint
pub struct HttpTransport {
    endpoint: String,
    agent: Agent,
}

impl HttpTransport {
    /// 创建 HTTP 传输
    ///
    /// `timeout` 为 `None` 时不设置全局超时，由底层连接决定
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, AdminError> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| AdminError::config(format!("Invalid RPC endpoint '{}': {}", endpoint, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AdminError::config(format!(
                "RPC endpoint must be http(s), got '{}'",
                parsed.scheme()
            )));
        }

        // 非 2xx 响应仍可能携带 JSON-RPC 错误信封，交给上层解析
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            endpoint: endpoint.to_string(),
            agent,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 同步发送请求（在 spawn_blocking 中调用）
    fn send_sync(
        agent: Agent,
        endpoint: String,
        request: RpcRequest,
    ) -> Result<RpcResponse, AdminError> {
        let resp = agent.post(&endpoint).send_json(&request).map_err(|e| {
            warn!("RPC request {} to \"{}\" failed: {}", request.method, endpoint, e);
            AdminError::transport(e.to_string())
        })?;

        let status = resp.status();
        trace!("RPC {} answered with HTTP {}", request.method, status);

        resp.into_body()
            .read_json::<RpcResponse>()
            .map_err(|e| {
                AdminError::protocol(format!(
                    "Malformed response for {} (HTTP {}): {}",
                    request.method, status, e
                ))
            })
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: RpcRequest) -> Result<RpcResponse, AdminError> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();

        tokio::task::spawn_blocking(move || Self::send_sync(agent, endpoint, request))
            .await
            .unwrap_or_else(|e| {
                warn!("RPC spawn_blocking failed: {}", e);
                Err(AdminError::transport(format!("request task failed: {}", e)))
            })
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
