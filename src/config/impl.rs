use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to loading `config.toml` when
/// `init_config` was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from `path` (default "config.toml"). If the file
/// doesn't exist, uses in-memory defaults plus `TLA__*` environment overrides.
///
/// # Examples
/// ```no_run
/// use tracklink_admin::config::init_config;
/// init_config(Some("admin.toml"));
/// ```
pub fn init_config(path: Option<&str>) {
    update_config(StaticConfig::load(path));
}

/// Replace the global configuration
pub fn update_config(config: StaticConfig) {
    match CONFIG.get() {
        Some(existing) => existing.store(Arc::new(config)),
        None => {
            CONFIG.get_or_init(|| ArcSwap::from_pointee(config));
        }
    }
}
