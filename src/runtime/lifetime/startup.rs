//! Startup: configuration, logging and the shared context

use std::sync::Arc;

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{get_config, init_config};
use crate::context::AppContext;
use crate::errors::AdminError;
use crate::runtime::modes::Mode;
use crate::system::logging::{LogTarget, default_tui_log_path, init_logging};

pub struct StartupContext {
    pub ctx: Arc<AppContext>,
    /// 日志 writer 的 guard，需保持到进程结束
    _log_guard: WorkerGuard,
}

/// Where logs go by default for a mode. The TUI owns the terminal, so its
/// logs go to a file in the session directory.
pub fn log_target_for(mode: Mode) -> LogTarget {
    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            let config = get_config();
            LogTarget::File(default_tui_log_path(&config.session.resolve_dir()))
        }
        _ => LogTarget::Stderr,
    }
}

/// Load config, start logging and build the [`AppContext`]
pub fn prepare(config_path: Option<&str>, mode: Mode) -> Result<StartupContext, AdminError> {
    init_config(config_path);
    let config = get_config();
    config.validate()?;

    let log_guard = init_logging(&config.logging, log_target_for(mode))?;
    debug!("Starting in {:?} mode", mode);
    info!("tracklink-admin v{}", env!("CARGO_PKG_VERSION"));

    let ctx = AppContext::from_config(config)?;
    // 上次会话留下的 token
    ctx.auth().sync_from_storage();

    Ok(StartupContext {
        ctx,
        _log_guard: log_guard,
    })
}
