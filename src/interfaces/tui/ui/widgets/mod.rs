//! 可复用 UI 组件

pub mod charts;
mod data_table;
mod input_field;
mod popup;
mod select_field;
mod status_badge;
mod toast;

pub use data_table::DataTable;
pub use input_field::InputField;
pub use popup::{Popup, centered_rect};
pub use select_field::SelectField;
pub use status_badge::Badge;
pub use toast::render_toasts;
