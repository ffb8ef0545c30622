//! Logging system initialization
//!
//! Builds the tracing subscriber from [`LoggingConfig`]. A configured file
//! always wins; otherwise the caller picks the fallback sink, since the TUI
//! must never write logs onto the terminal it draws on.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::AdminError;

const DEFAULT_LOG_NAME: &str = "tracklink-admin.log";

/// Where logs go when `logging.file` is not set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn open_writer(
    path: &Path,
    config: &LoggingConfig,
) -> Result<Box<dyn std::io::Write + Send + Sync>, AdminError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    if config.enable_rotation {
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_NAME);
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| AdminError::config(format!("Failed to create rolling log appender: {}", e)))?;
        Ok(Box::new(appender))
    } else {
        // Non-rotating, append to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Box::new(file))
    }
}

/// Initialize logging system based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// A subscriber that is already installed (tests, embedding) is left in place.
pub fn init_logging(config: &LoggingConfig, fallback: LogTarget) -> Result<WorkerGuard, AdminError> {
    let configured = config
        .file
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(PathBuf::from);

    let (writer, to_terminal): (Box<dyn std::io::Write + Send + Sync>, bool) =
        match configured.map(LogTarget::File).unwrap_or(fallback) {
            LogTarget::File(path) => (open_writer(&path, config)?, false),
            LogTarget::Stderr => (Box::new(std::io::stderr()), true),
        };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| AdminError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_terminal);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    if let Err(e) = installed {
        eprintln!("[WARN] Logging already initialized: {}", e);
    }

    Ok(guard)
}

/// Default log file for the TUI when none is configured
pub fn default_tui_log_path(session_dir: &Path) -> PathBuf {
    session_dir.join(DEFAULT_LOG_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_tui_log_path() {
        assert_eq!(
            default_tui_log_path(Path::new("/tmp/s")),
            PathBuf::from("/tmp/s/tracklink-admin.log")
        );
    }

    #[test]
    fn test_open_writer_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("admin.log");
        let config = LoggingConfig {
            enable_rotation: false,
            ..Default::default()
        };
        let mut writer = open_writer(&path, &config).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("hello"));
    }
}
