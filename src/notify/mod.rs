pub mod toast;

pub use toast::{DEFAULT_TOAST_TTL, Toast, ToastKind, ToastStore};
