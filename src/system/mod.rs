//! System-level modules
//!
//! Process-wide setup that is not part of the admin domain itself.

pub mod logging;
