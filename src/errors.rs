use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone)]
pub enum AdminError {
    /// Error object returned by the backend inside a JSON-RPC envelope
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },
    Transport(String),
    Protocol(String),
    Storage(String),
    InvalidInput(String),
    Config(String),
}

impl AdminError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AdminError::Rpc { .. } => "E001",
            AdminError::Transport(_) => "E002",
            AdminError::Protocol(_) => "E003",
            AdminError::Storage(_) => "E004",
            AdminError::InvalidInput(_) => "E005",
            AdminError::Config(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AdminError::Rpc { .. } => "RPC Error",
            AdminError::Transport(_) => "Transport Error",
            AdminError::Protocol(_) => "Protocol Error",
            AdminError::Storage(_) => "Session Storage Error",
            AdminError::InvalidInput(_) => "Invalid Input",
            AdminError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AdminError::Rpc { message, .. } => message,
            AdminError::Transport(msg) => msg,
            AdminError::Protocol(msg) => msg,
            AdminError::Storage(msg) => msg,
            AdminError::InvalidInput(msg) => msg,
            AdminError::Config(msg) => msg,
        }
    }

    /// Numeric JSON-RPC error code, if this error came from the backend.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            AdminError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the backend rejected the session token (codes 4001/4002).
    pub fn is_session_expired(&self) -> bool {
        self.rpc_code()
            .is_some_and(crate::rpc::protocol::is_session_expired_code)
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        let detail = match self {
            AdminError::Rpc { code, message, .. } => format!("{} (code {})", message, code),
            other => other.message().to_string(),
        };
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            detail.white()
        )
    }

    /// 格式化为简洁输出（用于日志和 TUI）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Toasts show server messages verbatim
            AdminError::Rpc { message, .. } => write!(f, "{}", message),
            other => write!(f, "{}", other.format_simple()),
        }
    }
}

impl std::error::Error for AdminError {}

// 便捷的构造函数
impl AdminError {
    pub fn rpc<T: Into<String>>(code: i64, message: T, data: Option<Value>) -> Self {
        AdminError::Rpc {
            code,
            message: message.into(),
            data,
        }
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        AdminError::Transport(msg.into())
    }

    pub fn protocol<T: Into<String>>(msg: T) -> Self {
        AdminError::Protocol(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        AdminError::Storage(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        AdminError::InvalidInput(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        AdminError::Config(msg.into())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Protocol(err.to_string())
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_display_is_server_message() {
        let err = AdminError::rpc(1001, "Tracker name already exists", None);
        assert_eq!(err.to_string(), "Tracker name already exists");
        assert_eq!(err.rpc_code(), Some(1001));
    }

    #[test]
    fn test_non_rpc_display_uses_simple_format() {
        let err = AdminError::transport("connection refused");
        assert_eq!(err.to_string(), "Transport Error: connection refused");
        assert_eq!(err.rpc_code(), None);
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AdminError::rpc(1, "x", None),
            AdminError::transport("x"),
            AdminError::protocol("x"),
            AdminError::storage("x"),
            AdminError::invalid_input("x"),
            AdminError::config("x"),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_session_expired_detection() {
        assert!(AdminError::rpc(4001, "token expired", None).is_session_expired());
        assert!(AdminError::rpc(4002, "token invalid", None).is_session_expired());
        assert!(!AdminError::rpc(4003, "forbidden", None).is_session_expired());
        assert!(!AdminError::transport("timeout").is_session_expired());
    }

    #[test]
    fn test_format_colored_contains_code_and_message() {
        colored::control::set_override(false);
        let out = AdminError::rpc(4001, "token expired", None).format_colored();
        assert!(out.contains("E001"));
        assert!(out.contains("token expired (code 4001)"));
    }

    #[test]
    fn test_from_serde_error_is_protocol() {
        let err: AdminError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, AdminError::Protocol(_)));
    }
}
