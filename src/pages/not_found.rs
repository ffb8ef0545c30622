use std::sync::Arc;

use crate::context::AppContext;
use crate::router::Route;

pub struct NotFoundPage {
    ctx: Arc<AppContext>,
}

impl NotFoundPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    pub fn go_home(&self) {
        self.ctx.navigate(Route::Dashboard);
    }
}
