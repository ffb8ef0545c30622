//! Generated tokens: list and delete

use std::sync::Arc;

use super::{PageTask, task, toast_failure};
use crate::client::TokenClient;
use crate::context::AppContext;
use crate::models::Token;
use crate::router::Route;

pub struct TokensPage {
    ctx: Arc<AppContext>,
    tokens: Arc<TokenClient>,
    pending_delete: Option<Token>,
}

impl TokensPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let tokens = Arc::new(TokenClient::new(ctx.rpc()));
        Self {
            ctx,
            tokens,
            pending_delete: None,
        }
    }

    pub fn load(&self) -> PageTask {
        let tokens = self.tokens.clone();
        task(async move { tokens.fetch().await })
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.items()
    }

    pub fn is_loading(&self) -> bool {
        self.tokens.is_loading()
    }

    pub fn open_generator(&self) {
        self.ctx.navigate(Route::TokenGenerator);
    }

    pub fn request_delete(&mut self, token: &Token) {
        self.pending_delete = Some(token.clone());
    }

    pub fn pending_delete(&self) -> Option<&Token> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn is_deleting(&self) -> bool {
        self.tokens.is_deleting()
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(token) = self.pending_delete.clone() else {
            return false;
        };
        match self.tokens.delete(&token.id).await {
            Ok(_) => {
                self.ctx.toasts().success("Token deleted");
                self.pending_delete = None;
                self.tokens.fetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::signed_in;
    use crate::rpc::methods;
    use crate::rpc::mock::MockReply;
    use serde_json::json;

    fn token_json() -> serde_json::Value {
        json!({ "id": "k1", "short_code": "aB3x", "tracker_id": "t1", "campaign_id": null,
                "channel_id": null, "target_id": "g1", "mode": "js",
                "tracking_url": "https://t.example.com/aB3x" })
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let (ctx, mock) = signed_in();
        mock.on(methods::TOKEN_LIST, MockReply::ok(json!([token_json()])));
        mock.once(methods::TOKEN_DELETE, MockReply::ok(json!({ "ok": true })));

        let mut page = TokensPage::new(ctx.clone());
        page.load().await;
        let token = page.tokens()[0].clone();
        assert_eq!(token.campaign_id, None);

        page.request_delete(&token);
        assert!(page.confirm_delete().await);
        assert_eq!(mock.requests_for(methods::TOKEN_DELETE)[0].params["id"], "k1");
        assert_eq!(mock.call_count(methods::TOKEN_LIST), 2);
        assert_eq!(ctx.toasts().latest().unwrap().message, "Token deleted");
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_dialog() {
        let (ctx, mock) = signed_in();
        mock.on(methods::TOKEN_DELETE, MockReply::error(1004, "Token not found"));

        let mut page = TokensPage::new(ctx.clone());
        let token: Token = serde_json::from_value(token_json()).unwrap();
        page.request_delete(&token);

        assert!(!page.confirm_delete().await);
        assert!(page.pending_delete().is_some());
        assert_eq!(ctx.toasts().latest().unwrap().message, "Token not found");
    }

    #[test]
    fn test_open_generator_navigates() {
        let (ctx, _) = signed_in();
        TokensPage::new(ctx.clone()).open_generator();
        assert_eq!(ctx.current_route(), Route::TokenGenerator);
    }
}
