//! TUI 应用状态
//!
//! App 持有所有页面控制器和少量纯界面状态（当前行、表单焦点、浮层）。
//! 业务状态全部在页面控制器里，这里只负责路由切换时的加载与重置。

mod form_focus;

pub use form_focus::FormFocus;

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::context::AppContext;
use crate::interfaces::tui::constants::COPY_FEEDBACK;
use crate::pages::{
    CampaignsPage, ChannelModal, ChannelsPage, DashboardPage, LoginPage, NotFoundPage, PageTask,
    SiteModal, SitesPage, TargetsPage, TokenGeneratorPage, TokensPage, TrackersPage,
};
use crate::router::Route;

/// 覆盖在页面之上的浮层
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Exiting,
}

pub struct App {
    ctx: Arc<AppContext>,
    /// 当前渲染的路由（鉴权之后）
    pub route: Route,
    /// 列表选中行
    pub row: usize,
    /// 表单焦点
    pub focus: FormFocus,
    pub overlay: Overlay,
    /// 仪表盘自定义日期范围编辑中
    pub editing_range: bool,
    copied: Option<(String, Instant)>,

    pub login: LoginPage,
    pub dashboard: DashboardPage,
    pub trackers: TrackersPage,
    pub campaigns: CampaignsPage,
    pub channels: ChannelsPage,
    pub targets: TargetsPage,
    pub sites: SitesPage,
    pub tokens: TokensPage,
    pub generator: TokenGeneratorPage,
    pub not_found: NotFoundPage,
}

impl App {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let route = ctx.current_route();
        let mut app = Self {
            route,
            row: 0,
            focus: FormFocus::default(),
            overlay: Overlay::None,
            editing_range: false,
            copied: None,
            login: LoginPage::new(ctx.clone()),
            dashboard: DashboardPage::new(ctx.clone()),
            trackers: TrackersPage::new(ctx.clone()),
            campaigns: CampaignsPage::new(ctx.clone()),
            channels: ChannelsPage::new(ctx.clone()),
            targets: TargetsPage::new(ctx.clone()),
            sites: SitesPage::new(ctx.clone()),
            tokens: TokensPage::new(ctx.clone()),
            generator: TokenGeneratorPage::new(ctx.clone()),
            not_found: NotFoundPage::new(ctx.clone()),
            ctx,
        };
        app.enter(route);
        app
    }

    pub fn ctx(&self) -> &Arc<AppContext> {
        &self.ctx
    }

    /// 后台执行页面任务，界面继续绘制加载状态
    pub fn spawn(&self, task: PageTask) {
        tokio::spawn(task);
    }

    /// 路由变化（导航、登录、会话过期）时进入新页面
    pub fn sync_route(&mut self) {
        let route = self.ctx.current_route();
        if route != self.route {
            debug!("Route changed: {} -> {}", self.route.path(), route.path());
            self.enter(route);
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.ctx.navigate(route);
        self.sync_route();
    }

    /// 每个 tick 调用：同步其他进程写入的会话，并跟随路由
    pub fn on_tick(&mut self) {
        self.ctx.auth().sync_from_storage();
        self.sync_route();
    }

    fn enter(&mut self, route: Route) {
        self.route = route;
        self.row = 0;
        self.focus = FormFocus::default();
        self.editing_range = false;

        let task = match route {
            Route::Login => {
                self.login = LoginPage::new(self.ctx.clone());
                None
            }
            Route::Dashboard => Some(self.dashboard.load()),
            Route::Trackers => Some(self.trackers.load()),
            Route::Campaigns => Some(self.campaigns.load()),
            Route::Channels => Some(self.channels.load()),
            Route::Targets => Some(self.targets.load()),
            Route::Sites => Some(self.sites.load()),
            Route::Tokens => Some(self.tokens.load()),
            Route::TokenGenerator => {
                // 生成器不保留草稿
                self.generator = TokenGeneratorPage::new(self.ctx.clone());
                Some(self.generator.load())
            }
            Route::NotFound => None,
        };
        if let Some(task) = task {
            self.spawn(task);
        }
    }

    /// 当前按键是否应输入到文本框
    pub fn is_text_input(&self) -> bool {
        match self.route {
            Route::Login => true,
            Route::Dashboard => self.editing_range,
            Route::Trackers => self.trackers.modal().is_some(),
            Route::Campaigns => self.campaigns.is_create_open(),
            Route::Channels => self.channels.modal().is_some(),
            Route::Targets => self.targets.is_create_open(),
            Route::Sites => matches!(self.sites.modal(), Some(SiteModal::Create)),
            _ => false,
        }
    }

    pub fn is_channel_import(&self) -> bool {
        self.channels.modal() == Some(ChannelModal::Import)
    }

    pub fn move_row(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.row = 0;
            return;
        }
        let max = len as isize - 1;
        self.row = (self.row as isize + delta).clamp(0, max) as usize;
    }

    /// 复制到剪贴板，成功后短暂显示提示
    pub fn copy(&mut self, text: &str, what: &str) {
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_string())) {
            Ok(()) => self.copied = Some((what.to_string(), Instant::now())),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                self.ctx.toasts().error("Clipboard unavailable");
            }
        }
    }

    pub fn copied_label(&self) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|(_, at)| at.elapsed() < COPY_FEEDBACK)
            .map(|(what, _)| what.as_str())
    }
}
