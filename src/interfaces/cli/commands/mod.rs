//! CLI command implementations

pub mod campaigns;
pub mod channels;
pub mod config_gen;
mod helpers;
pub mod session;
pub mod sites;
pub mod stats;
pub mod targets;
pub mod tokens;
pub mod trackers;
