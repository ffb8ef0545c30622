//! Tracklink Admin - terminal console for the tracklink platform
//!
//! Talks JSON-RPC to the tracklink backend to manage trackers, campaigns,
//! channels, targets, sites and tracking tokens, and renders the analytics
//! dashboard in the terminal.
//!
//! # Features
//! - **cli**: One-shot subcommands (default)
//! - **tui**: Terminal user interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `rpc`: JSON-RPC protocol, transports and the authenticated client
//! - `session`: Session token persistence and auth state
//! - `client`: Per-entity data clients with loading state
//! - `analytics`: Period ranges and dashboard aggregation
//! - `pages`: Page state machines shared by the interfaces
//! - `router` / `notify`: Navigation and toast notifications
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod analytics;
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod notify;
pub mod pages;
pub mod router;
pub mod rpc;
pub mod runtime;
pub mod session;
pub mod system;
pub mod utils;
