//! Persisted session token slot
//!
//! A single opaque string stored under the fixed key `admin_token`.
//! `FileTokenStore` keeps it in a file of that name inside the session
//! directory, so several console instances pointed at the same directory
//! share one session.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::AdminError;

pub const TOKEN_KEY: &str = "admin_token";

pub trait TokenStore: Send + Sync {
    /// Missing or empty slot reads as `None`.
    fn load(&self) -> Result<Option<String>, AdminError>;
    fn save(&self, token: &str) -> Result<(), AdminError>;
    /// Clearing an empty slot is not an error.
    fn clear(&self) -> Result<(), AdminError>;
    fn name(&self) -> &'static str;
}

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: std::io::Error) -> AdminError {
        AdminError::storage(format!(
            "Failed to {} session file {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AdminError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.storage_error("read", e)),
        }
    }

    fn save(&self, token: &str) -> Result<(), AdminError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.storage_error("create directory for", e))?;
        }

        // 先写临时文件再重命名，避免其他实例读到半截 token
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, token).map_err(|e| self.storage_error("write", e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.storage_error("restrict permissions of", e))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| self.storage_error("replace", e))
    }

    fn clear(&self) -> Result<(), AdminError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error("remove", e)),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// In-memory slot. Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(initial)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AdminError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, token: &str) -> Result<(), AdminError> {
        *self.slot.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AdminError> {
        *self.slot.lock() = None;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
