//! JSON-RPC 2.0 envelope and the admin method catalog

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AdminError;

pub const JSONRPC_VERSION: &str = "2.0";

/// Param key the session token is injected under
pub const TOKEN_PARAM: &str = "admin_token";

/// Backend codes meaning "token expired / invalid"
pub const SESSION_EXPIRED_CODES: [i64; 2] = [4001, 4002];

pub fn is_session_expired_code(code: i64) -> bool {
    SESSION_EXPIRED_CODES.contains(&code)
}

pub mod methods {
    pub const LOGIN: &str = "admin.login";

    pub const TRACKER_CREATE: &str = "admin.tracker.create";
    pub const TRACKER_LIST: &str = "admin.tracker.list";
    pub const TRACKER_UPDATE: &str = "admin.tracker.update";
    pub const TRACKER_DELETE: &str = "admin.tracker.delete";

    pub const CAMPAIGN_CREATE: &str = "admin.campaign.create";
    pub const CAMPAIGN_LIST: &str = "admin.campaign.list";

    pub const CHANNEL_CREATE: &str = "admin.channel.create";
    pub const CHANNEL_LIST: &str = "admin.channel.list";
    pub const CHANNEL_BATCH_IMPORT: &str = "admin.channel.batchImport";

    pub const TARGET_CREATE: &str = "admin.target.create";
    pub const TARGET_LIST: &str = "admin.target.list";

    pub const SITE_CREATE: &str = "admin.site.create";
    pub const SITE_LIST: &str = "admin.site.list";

    pub const TOKEN_GENERATE: &str = "admin.token.generate";
    pub const TOKEN_LIST: &str = "admin.token.list";
    pub const TOKEN_DELETE: &str = "admin.token.delete";

    pub const STATS_CLICKS: &str = "admin.stats.clicks";
    pub const STATS_EVENTS: &str = "admin.stats.events";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Map<String, Value>,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Map<String, Value>, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<RpcErrorObject> for AdminError {
    fn from(err: RpcErrorObject) -> Self {
        AdminError::rpc(err.code, err.message, err.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
    #[serde(default)]
    pub id: Value,
}

impl RpcResponse {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id: Value::from(id),
        }
    }

    pub fn failure(id: u64, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(RpcErrorObject {
                code,
                message: message.into(),
                data: None,
            }),
            id: Value::from(id),
        }
    }
}

/// Serialize a parameter struct into the params object of a request.
///
/// `null` (unit) becomes an empty object; any other non-object is rejected.
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Map<String, Value>, AdminError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(AdminError::protocol(format!(
            "RPC params must be an object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_envelope() {
        let mut params = Map::new();
        params.insert("name".into(), json!("x"));
        let req = RpcRequest::new(methods::TRACKER_CREATE, params, 7);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "jsonrpc": "2.0", "method": "admin.tracker.create", "params": { "name": "x" }, "id": 7 })
        );
    }

    #[test]
    fn test_response_error_without_data() {
        let resp: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "error": { "code": 4001, "message": "token expired" },
            "id": 3
        }))
        .unwrap();
        let err = resp.error.unwrap();
        assert_eq!(err.code, 4001);
        assert_eq!(err.data, None);
    }

    #[test]
    fn test_response_null_result_is_none() {
        let resp: RpcResponse =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "result": null, "id": 1 })).unwrap();
        assert!(resp.result.is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_to_params_rejects_arrays() {
        assert!(to_params(&vec![1, 2]).is_err());
        assert!(to_params(&()).unwrap().is_empty());
    }

    #[test]
    fn test_session_expired_codes() {
        assert!(is_session_expired_code(4001));
        assert!(is_session_expired_code(4002));
        assert!(!is_session_expired_code(4000));
    }
}
