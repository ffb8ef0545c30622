//! Page controllers
//!
//! Each screen of the console is backed by a controller that owns its entity
//! clients and a handle to the [`AppContext`]. Controllers hold no rendering
//! code: the TUI draws from them and forwards input to them, the integration
//! tests drive them directly.
//!
//! # Async contract
//!
//! - `load()` and selection changes return a [`PageTask`] built from shared
//!   handles. The TUI spawns it and keeps drawing loading skeletons; tests
//!   simply `.await` it.
//! - Mutations (`submit_*`, `confirm_delete`) are `async fn`s awaited in
//!   place. They toast the outcome and return whether they succeeded.

use std::future::Future;
use std::pin::Pin;

use crate::context::AppContext;
use crate::errors::AdminError;

pub mod campaigns;
pub mod channels;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod sites;
pub mod targets;
pub mod token_generator;
pub mod tokens;
pub mod trackers;

pub use campaigns::{CampaignForm, CampaignsPage};
pub use channels::{ChannelForm, ChannelModal, ChannelsPage, TagRow};
pub use dashboard::{CustomRange, DashboardPage, EntityCount};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use sites::{SiteForm, SiteModal, SitesPage};
pub use targets::{TargetForm, TargetsPage};
pub use token_generator::TokenGeneratorPage;
pub use tokens::TokensPage;
pub use trackers::{TrackerForm, TrackerModal, TrackersPage};

/// Background work started by a page; `'static` so it can be spawned.
pub type PageTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

pub(crate) fn task<F>(fut: F) -> PageTask
where
    F: Future<Output = ()> + Send + 'static,
{
    Box::pin(fut)
}

pub(crate) fn noop() -> PageTask {
    Box::pin(async {})
}

/// One entry of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Step through `[placeholder, options...]`. `None` is the placeholder.
///
/// A selection that is no longer among the options restarts from the
/// placeholder.
pub fn cycle_selection(
    options: &[SelectOption],
    current: Option<&str>,
    forward: bool,
) -> Option<String> {
    let len = options.len() + 1;
    let pos = current
        .and_then(|v| options.iter().position(|o| o.value == v))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    next.checked_sub(1).map(|i| options[i].value.clone())
}

/// Label of the selected option, or the placeholder.
pub fn selected_label(options: &[SelectOption], current: Option<&str>, placeholder: &str) -> String {
    current
        .and_then(|v| options.iter().find(|o| o.value == v))
        .map(|o| o.label.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Failed write: toast the server message. Expired sessions are not toasted,
/// the redirect to the login screen already tells the user.
pub(crate) fn toast_failure(ctx: &AppContext, err: &AdminError) {
    if !err.is_session_expired() {
        ctx.toasts().error(err.to_string());
    }
}

/// Presence check for required fields; warns about the first missing one.
pub(crate) fn require(ctx: &AppContext, fields: &[(&str, bool)]) -> bool {
    match fields.iter().find(|(_, ok)| !ok) {
        Some((label, _)) => {
            ctx.toasts().warning(format!("{} is required", label));
            false
        }
        None => true,
    }
}

pub(crate) fn present(value: &str) -> bool {
    !value.trim().is_empty()
}
