//! Application context
//!
//! One instance per console session. Owns every piece of shared state the
//! pages need so nothing lives in a global: the RPC client, the session, the
//! toast queue and the navigator. Tests build it over a `MockTransport` and a
//! `MemoryTokenStore`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analytics::ViewOptions;
use crate::config::StaticConfig;
use crate::errors::AdminError;
use crate::notify::ToastStore;
use crate::router::{self, Navigator, Route};
use crate::rpc::{HttpTransport, RpcClient, RpcTransport};
use crate::session::{AuthStore, FileTokenStore, MemoryTokenStore, TokenStore};

pub struct AppContext {
    config: Arc<StaticConfig>,
    rpc: Arc<RpcClient>,
    auth: Arc<AuthStore>,
    toasts: ToastStore,
    navigator: Navigator,
}

impl AppContext {
    pub fn new(
        config: Arc<StaticConfig>,
        transport: Arc<dyn RpcTransport>,
        store: Arc<dyn TokenStore>,
    ) -> Arc<Self> {
        let auth = Arc::new(AuthStore::new(store));
        let navigator = Navigator::default();
        let rpc = Arc::new(RpcClient::new(transport, auth.clone(), navigator.clone()));
        let toasts = ToastStore::new(config.ui.toast_ttl());

        debug!(
            "AppContext ready: transport={}, authenticated={}",
            rpc.transport_name(),
            auth.is_authenticated()
        );

        Arc::new(Self {
            config,
            rpc,
            auth,
            toasts,
            navigator,
        })
    }

    /// HTTP transport plus the configured session store
    pub fn from_config(config: Arc<StaticConfig>) -> Result<Arc<Self>, AdminError> {
        let transport = HttpTransport::new(&config.rpc.endpoint, config.rpc.timeout())?;
        let store: Arc<dyn TokenStore> = if config.session.ephemeral {
            Arc::new(MemoryTokenStore::default())
        } else {
            Arc::new(FileTokenStore::new(config.session.resolve_dir()))
        };
        info!(
            "Using RPC endpoint {} (session store: {})",
            config.rpc.endpoint,
            store.name()
        );
        Ok(Self::new(config, Arc::new(transport), store))
    }

    pub fn config(&self) -> &StaticConfig {
        &self.config
    }

    pub fn rpc(&self) -> &Arc<RpcClient> {
        &self.rpc
    }

    pub fn auth(&self) -> &Arc<AuthStore> {
        &self.auth
    }

    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            pie_max_items: self.config.ui.pie_max_items,
            ranking_max_items: self.config.ui.ranking_max_items,
        }
    }

    /// Route to render after the auth gate.
    pub fn current_route(&self) -> Route {
        router::resolve(self.navigator.current(), self.auth.is_authenticated())
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.navigator.navigate(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::{MockReply, MockTransport};
    use crate::rpc::methods;

    fn context(token: Option<&str>) -> (Arc<AppContext>, Arc<MockTransport>) {
        let mock = Arc::new(MockTransport::new());
        let store = Arc::new(MemoryTokenStore::new(token.map(String::from)));
        let ctx = AppContext::new(Arc::new(StaticConfig::default()), mock.clone(), store);
        (ctx, mock)
    }

    #[test]
    fn test_gate_follows_session() {
        let (ctx, _) = context(None);
        assert_eq!(ctx.current_route(), Route::Login);

        ctx.auth().set_token("t".into()).unwrap();
        assert_eq!(ctx.current_route(), Route::Dashboard);

        ctx.navigate(Route::Login);
        assert_eq!(ctx.current_route(), Route::Dashboard);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (ctx, _) = context(Some("t"));
        ctx.navigate(Route::Sites);
        ctx.logout();
        assert!(!ctx.auth().is_authenticated());
        assert_eq!(ctx.navigator().current(), Route::Login);
        assert_eq!(ctx.current_route(), Route::Login);
    }

    #[tokio::test]
    async fn test_expired_session_from_any_call() {
        let (ctx, mock) = context(Some("stale"));
        ctx.navigate(Route::Channels);
        mock.on(methods::CHANNEL_LIST, MockReply::error(4002, "Token expired"));

        let result = ctx
            .rpc()
            .call::<serde_json::Value>(methods::CHANNEL_LIST, serde_json::Map::new())
            .await;

        assert_eq!(result.unwrap_err().rpc_code(), Some(4002));
        assert_eq!(ctx.current_route(), Route::Login);
        assert!(ctx.auth().token().is_none());
    }

    #[test]
    fn test_view_options_from_config() {
        let mut config = StaticConfig::default();
        config.ui.pie_max_items = 3;
        let mock = Arc::new(MockTransport::new());
        let ctx = AppContext::new(
            Arc::new(config),
            mock,
            Arc::new(MemoryTokenStore::default()),
        );
        assert_eq!(ctx.view_options().pie_max_items, 3);
        assert_eq!(ctx.view_options().ranking_max_items, 10);
    }
}
