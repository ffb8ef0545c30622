use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::token_store::TokenStore;
use crate::errors::AdminError;
use crate::models::{LoginParams, LoginResult};
use crate::rpc::{RpcClient, methods};

/// Session token state for one console instance.
///
/// The in-memory token mirrors the persisted slot. Changes are published on
/// a watch channel so screens can react to sign-in and sign-out.
pub struct AuthStore {
    store: Arc<dyn TokenStore>,
    state: watch::Sender<Option<String>>,
}

impl AuthStore {
    /// Reads the persisted slot once. An unreadable slot starts signed out.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let initial = store.load().unwrap_or_else(|e| {
            warn!("Failed to read session token from {} store: {}", store.name(), e);
            None
        });
        let (state, _) = watch::channel(initial);
        Self { store, state }
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.state.subscribe()
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// Backend errors are returned unchanged; the previous session is kept.
    pub async fn login(
        &self,
        rpc: &RpcClient,
        username: &str,
        password: &str,
    ) -> Result<(), AdminError> {
        let params = LoginParams {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result: LoginResult = rpc.call_with(methods::LOGIN, &params).await?;
        self.set_token(result.admin_token)?;
        info!("Signed in as {}", username);
        Ok(())
    }

    pub fn set_token(&self, token: String) -> Result<(), AdminError> {
        self.store.save(&token)?;
        self.state.send_replace(Some(token));
        Ok(())
    }

    pub fn logout(&self) {
        self.clear_session();
        info!("Signed out");
    }

    /// Backend rejected the token; same effect as logout.
    pub fn expire(&self) {
        self.clear_session();
        info!("Session expired");
    }

    fn clear_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear persisted session: {}", e);
        }
        self.state.send_replace(None);
    }

    /// Pick up changes another instance made to the shared slot.
    ///
    /// Returns whether the in-memory state changed.
    pub fn sync_from_storage(&self) -> bool {
        let persisted = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Session sync skipped: {}", e);
                return false;
            }
        };

        let changed = self.state.send_if_modified(|current| {
            if *current == persisted {
                false
            } else {
                *current = persisted.clone();
                true
            }
        });
        if changed {
            debug!("Session changed in {} store", self.store.name());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    #[test]
    fn test_initial_state_from_store() {
        let auth = AuthStore::new(Arc::new(MemoryTokenStore::new(Some("t".into()))));
        assert!(auth.is_authenticated());
        assert_eq!(auth.token().as_deref(), Some("t"));

        let auth = AuthStore::new(Arc::new(MemoryTokenStore::default()));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_set_token_persists() {
        let store = MemoryTokenStore::default();
        let auth = AuthStore::new(Arc::new(store.clone()));
        auth.set_token("abc".into()).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn test_logout_clears_store_and_notifies() {
        let store = MemoryTokenStore::new(Some("t".into()));
        let auth = AuthStore::new(Arc::new(store.clone()));
        let mut rx = auth.subscribe();

        auth.logout();

        assert!(!auth.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), None);
    }

    #[test]
    fn test_sync_observes_other_instance() {
        let shared = MemoryTokenStore::new(Some("t".into()));
        let first = AuthStore::new(Arc::new(shared.clone()));
        let second = AuthStore::new(Arc::new(shared.clone()));

        first.logout();
        assert!(second.is_authenticated());
        assert!(second.sync_from_storage());
        assert!(!second.is_authenticated());

        // nothing new to observe
        assert!(!second.sync_from_storage());
    }
}
