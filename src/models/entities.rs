//! Admin entities as they travel over the wire
//!
//! Timestamps stay as the server's strings; see [`crate::utils::format_timestamp`]
//! for display.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 后端用空字符串表示未设置的可选 id
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TrackerType {
    #[default]
    Ad,
    Web,
}

/// How a tracking link hands the visitor over to the target
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum RedirectMode {
    #[default]
    #[serde(rename = "302")]
    #[strum(serialize = "302")]
    Http302,
    #[serde(rename = "js")]
    #[strum(serialize = "js")]
    Js,
}

impl RedirectMode {
    pub fn label(&self) -> &'static str {
        match self {
            RedirectMode::Http302 => "302 Redirect",
            RedirectMode::Js => "JS Redirect",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            RedirectMode::Http302 => RedirectMode::Js,
            RedirectMode::Js => RedirectMode::Http302,
        }
    }
}

impl TrackerType {
    pub fn cycle(self) -> Self {
        match self {
            TrackerType::Ad => TrackerType::Web,
            TrackerType::Web => TrackerType::Ad,
        }
    }
}

/// Entity status. Only `active` and `inactive` are known; anything else is
/// carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }

    /// Toggle between the two known states; unknown values become `active`.
    pub fn toggle(&self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            _ => Status::Active,
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Status::Active,
            "inactive" => Status::Inactive,
            _ => Status::Other(value),
        }
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        Status::from(value.to_string())
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: TrackerType,
    pub name: String,
    #[serde(default)]
    pub mode: RedirectMode,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub tracker_id: String,
    pub name: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub tracker_id: String,
    pub campaign_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Channel {
    /// `key=value` pairs joined for single-line display.
    pub fn tags_display(&self) -> String {
        self.tags
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub tracker_id: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_key: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// A generated tracking token. Campaign and channel are optional scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub short_code: String,
    pub tracker_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub campaign_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub channel_id: Option<String>,
    pub target_id: String,
    #[serde(default)]
    pub mode: RedirectMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_url: String,
}
