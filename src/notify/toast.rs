use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use strum::{AsRefStr, Display};
use tracing::trace;

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

struct ToastQueue {
    counter: AtomicU64,
    toasts: Mutex<Vec<Toast>>,
    ttl: Duration,
}

impl ToastQueue {
    fn remove(&self, id: u64) -> bool {
        let mut toasts = self.toasts.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }
}

/// Ephemeral notification queue.
///
/// Each toast removes itself after the ttl when added from inside a tokio
/// runtime. Clones share the queue.
#[derive(Clone)]
pub struct ToastStore {
    inner: Arc<ToastQueue>,
}

impl ToastStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(ToastQueue {
                counter: AtomicU64::new(0),
                toasts: Mutex::new(Vec::new()),
                ttl,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    pub fn add(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.inner.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let message = message.into();
        trace!(id, %kind, "toast: {}", message);
        self.inner.toasts.lock().push(Toast { id, message, kind });

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let queue: Weak<ToastQueue> = Arc::downgrade(&self.inner);
            let ttl = self.inner.ttl;
            handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                if let Some(queue) = queue.upgrade() {
                    queue.remove(id);
                }
            });
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Warning)
    }

    /// Unknown ids are ignored.
    pub fn remove(&self, id: u64) -> bool {
        self.inner.remove(id)
    }

    /// Current queue, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.toasts.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newest toast, if any.
    pub fn latest(&self) -> Option<Toast> {
        self.inner.toasts.lock().last().cloned()
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}
