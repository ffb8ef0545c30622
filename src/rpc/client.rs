use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::protocol::{self, RpcRequest, TOKEN_PARAM, methods};
use super::transport::RpcTransport;
use crate::errors::AdminError;
use crate::router::{Navigator, Route};
use crate::session::AuthStore;

/// JSON-RPC client bound to one backend and one session.
///
/// Attaches the session token to every call except login, and resets the
/// session when the backend reports it expired.
pub struct RpcClient {
    transport: Arc<dyn RpcTransport>,
    auth: Arc<AuthStore>,
    navigator: Navigator,
    last_id: AtomicU64,
}

impl RpcClient {
    pub fn new(transport: Arc<dyn RpcTransport>, auth: Arc<AuthStore>, navigator: Navigator) -> Self {
        Self {
            transport,
            auth,
            navigator,
            last_id: AtomicU64::new(0),
        }
    }

    pub fn auth(&self) -> &Arc<AuthStore> {
        &self.auth
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    fn next_id(&self) -> u64 {
        self.last_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Perform one call and decode its `result`.
    ///
    /// A missing or `null` result decodes from JSON `null`, so `Option<_>`
    /// and `()` targets accept it.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        mut params: Map<String, Value>,
    ) -> Result<T, AdminError> {
        if method != methods::LOGIN
            && let Some(token) = self.auth.token()
        {
            params.insert(TOKEN_PARAM.to_string(), Value::String(token));
        }

        let id = self.next_id();
        debug!(method, id, transport = self.transport.name(), "rpc call");

        let response = self
            .transport
            .send(RpcRequest::new(method, params, id))
            .await?;

        if let Some(error) = response.error {
            if protocol::is_session_expired_code(error.code) {
                warn!(method, code = error.code, "session rejected by backend, signing out");
                self.auth.expire();
                self.navigator.navigate(Route::Login);
            } else {
                debug!(method, id, code = error.code, "rpc error: {}", error.message);
            }
            return Err(error.into());
        }

        let result = response.result.unwrap_or(Value::Null);
        serde_json::from_value(result).map_err(|e| {
            AdminError::protocol(format!("Unexpected result shape for {}: {}", method, e))
        })
    }

    /// Like [`call`](Self::call) with a serializable parameter struct.
    pub async fn call_with<P, T>(&self, method: &str, params: &P) -> Result<T, AdminError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let params = protocol::to_params(params)?;
        self.call(method, params).await
    }
}
