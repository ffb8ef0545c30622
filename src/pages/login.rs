//! Sign-in screen

use std::sync::Arc;

use tracing::warn;

use crate::context::AppContext;
use crate::router::Route;

pub struct LoginPage {
    ctx: Arc<AppContext>,
    pub username: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
}

impl LoginPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            username: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    /// Inline error of the last attempt
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sign in and go to the dashboard. Failures stay on this screen.
    pub async fn submit(&mut self) -> bool {
        self.error = None;
        if self.username.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Username and password are required".to_string());
            return false;
        }

        self.loading = true;
        let result = self
            .ctx
            .auth()
            .login(self.ctx.rpc(), self.username.trim(), &self.password)
            .await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.password.clear();
                self.ctx.navigate(Route::Dashboard);
                true
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.error = Some(e.to_string());
                false
            }
        }
    }
}
