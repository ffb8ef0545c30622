use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::AdminError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const ENV_PREFIX: &str = "TLA";
const APP_DIR_NAME: &str = "tracklink-admin";

/// 静态配置（从 TOML 和环境变量加载，启动时使用）
///
/// - rpc: 后端 JSON-RPC 端点
/// - session: 会话 token 存放位置
/// - ui: 终端界面参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：TLA，分隔符：__
    /// 示例：TLA__RPC__ENDPOINT=https://example.com/rpc
    pub fn load(path: Option<&str>) -> Self {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// 校验会导致启动失败的配置项
    pub fn validate(&self) -> Result<(), AdminError> {
        url::Url::parse(&self.rpc.endpoint).map_err(|e| {
            AdminError::config(format!("rpc.endpoint '{}' is not a URL: {}", self.rpc.endpoint, e))
        })?;

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(AdminError::config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }

        if self.ui.pie_max_items == 0 || self.ui.ranking_max_items == 0 {
            return Err(AdminError::config(
                "ui.pie_max_items and ui.ranking_max_items must be at least 1",
            ));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AdminError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AdminError::config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端 RPC 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    #[serde(default = "default_rpc_endpoint")]
    pub endpoint: String,
    /// 0 表示不设置超时
    #[serde(default)]
    pub timeout_secs: u64,
}

impl RpcConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// 会话配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// token 所在目录，未设置时使用用户配置目录
    #[serde(default)]
    pub dir: Option<String>,
    /// 仅在内存中保存 token，进程退出即登出
    #[serde(default)]
    pub ephemeral: bool,
}

impl SessionConfig {
    /// 解析会话目录：显式配置 > $XDG_CONFIG_HOME > $HOME/.config > 当前目录
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = self.dir.as_deref().filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
            return PathBuf::from(home).join(".config").join(APP_DIR_NAME);
        }
        PathBuf::from(format!(".{}", APP_DIR_NAME))
    }
}

/// 终端界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_pie_max_items")]
    pub pie_max_items: usize,
    #[serde(default = "default_ranking_max_items")]
    pub ranking_max_items: usize,
}

impl UiConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_rpc_endpoint() -> String {
    "https://asn.siliconnexus.cc/rpc".to_string()
}

fn default_toast_ttl_ms() -> u64 {
    4000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_pie_max_items() -> usize {
    6
}

fn default_ranking_max_items() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_rpc_endpoint(),
            timeout_secs: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ttl_ms: default_toast_ttl_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            pie_max_items: default_pie_max_items(),
            ranking_max_items: default_ranking_max_items(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
