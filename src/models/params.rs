//! Request parameters and small result shapes of the admin RPC methods

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entities::{RedirectMode, Status, TrackerType};

/// Serializes to `{}` for methods without parameters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// `admin.login` 返回 `{"admin_token": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResult {
    pub admin_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdParams {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteResult {
    #[serde(default)]
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTrackerParams {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TrackerType,
    pub mode: RedirectMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTrackerParams {
    pub id: String,
    pub name: String,
    pub mode: RedirectMode,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCampaignParams {
    pub tracker_id: String,
    pub name: String,
}

/// Optional tracker scope shared by campaign and target listings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<String>,
}

impl TrackerFilter {
    pub fn new(tracker_id: Option<String>) -> Self {
        Self { tracker_id }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateChannelParams {
    pub tracker_id: String,
    pub campaign_id: String,
    pub name: String,
    pub source: String,
    pub medium: String,
    pub tags: BTreeMap<String, String>,
}

/// Channels are forwarded as parsed JSON; the backend validates their shape.
#[derive(Debug, Clone, Serialize)]
pub struct BatchImportParams {
    pub channels: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchImportResult {
    #[serde(default)]
    pub imported: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTargetParams {
    pub tracker_id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSiteParams {
    pub name: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateTokenParams {
    pub tracker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    pub target_id: String,
    pub mode: RedirectMode,
}
