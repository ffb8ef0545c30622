//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for tracklink-admin using clap's derive macros.

use clap::{Args, Parser, Subcommand};

use crate::analytics::Period;
use crate::models::{RedirectMode, Status, TrackerType};

/// Tracklink Admin - terminal console for the tracklink platform
#[derive(Parser)]
#[command(name = "tracklink-admin")]
#[command(version)]
#[command(about = "Manage trackers, campaigns, channels and tracking tokens", long_about = None)]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Sign in and store the session token
    Login {
        /// Username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Read password from stdin (for scripting)
        #[arg(long)]
        password_stdin: bool,
    },

    /// Clear the stored session token
    Logout,

    /// Show endpoint and session state
    Status,

    /// Manage trackers
    Trackers {
        #[command(subcommand)]
        action: TrackerCommands,
    },

    /// Manage campaigns
    Campaigns {
        #[command(subcommand)]
        action: CampaignCommands,
    },

    /// Manage channels
    Channels {
        #[command(subcommand)]
        action: ChannelCommands,
    },

    /// Manage targets
    Targets {
        #[command(subcommand)]
        action: TargetCommands,
    },

    /// Manage sites
    Sites {
        #[command(subcommand)]
        action: SiteCommands,
    },

    /// Manage tracking tokens
    Tokens {
        #[command(subcommand)]
        action: TokenCommands,
    },

    /// Show click and event analytics
    Stats(StatsArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Output format shared by list commands
#[derive(Args, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum TrackerCommands {
    /// List trackers
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a tracker
    Create {
        name: String,

        /// Tracker type (ad, web)
        #[arg(long = "type", default_value = "ad")]
        kind: TrackerType,

        /// Redirect mode (302, js)
        #[arg(long, default_value = "302")]
        mode: RedirectMode,
    },

    /// Update a tracker
    Update {
        id: String,

        /// New name (default: keep)
        #[arg(long)]
        name: Option<String>,

        /// New redirect mode (302, js)
        #[arg(long)]
        mode: Option<RedirectMode>,

        /// New status (active, inactive)
        #[arg(long)]
        status: Option<Status>,
    },

    /// Delete a tracker
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CampaignCommands {
    /// List campaigns
    List {
        /// Only campaigns of this tracker
        #[arg(long)]
        tracker: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a campaign under an ad tracker
    Create {
        #[arg(long)]
        tracker: String,

        name: String,
    },
}

#[derive(Subcommand)]
pub enum ChannelCommands {
    /// List channels
    List {
        #[arg(long)]
        tracker: Option<String>,

        #[arg(long)]
        campaign: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a channel
    Create {
        #[arg(long)]
        tracker: String,

        #[arg(long)]
        campaign: String,

        name: String,

        #[arg(long, default_value = "")]
        source: String,

        #[arg(long, default_value = "")]
        medium: String,

        /// Tag as KEY=VALUE (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Import channels from a JSON array file
    Import {
        /// Input file path
        file_path: String,
    },
}

#[derive(Subcommand)]
pub enum TargetCommands {
    /// List targets
    List {
        #[arg(long)]
        tracker: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a target URL
    Create {
        #[arg(long)]
        tracker: String,

        url: String,
    },
}

#[derive(Subcommand)]
pub enum SiteCommands {
    /// List sites
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Register a site and print its key
    Create { name: String, domain: String },
}

#[derive(Subcommand)]
pub enum TokenCommands {
    /// List generated tokens
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a tracking token
    Generate {
        #[arg(long)]
        tracker: String,

        #[arg(long)]
        target: String,

        #[arg(long)]
        campaign: Option<String>,

        #[arg(long)]
        channel: Option<String>,

        /// Redirect mode (302, js)
        #[arg(long, default_value = "302")]
        mode: RedirectMode,
    },

    /// Delete a token
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args)]
pub struct StatsArgs {
    /// Reporting period (today, 7d, 30d, custom)
    #[arg(long, default_value = "7d")]
    pub period: Period,

    /// Custom range start (YYYY-MM-DD)
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Custom range end (YYYY-MM-DD)
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    #[arg(long)]
    pub tracker: Option<String>,

    #[arg(long)]
    pub campaign: Option<String>,

    #[arg(long)]
    pub channel: Option<String>,

    #[arg(long)]
    pub site: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl StatsArgs {
    /// `--start/--end` imply a custom period
    pub fn effective_period(&self) -> Period {
        if self.start.is_some() {
            Period::Custom
        } else {
            self.period
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tracker_create() {
        let cli = Cli::try_parse_from([
            "tracklink-admin",
            "trackers",
            "create",
            "Spring",
            "--type",
            "web",
            "--mode",
            "js",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Trackers {
                action: TrackerCommands::Create { name, kind, mode },
            }) => {
                assert_eq!(name, "Spring");
                assert_eq!(kind, TrackerType::Web);
                assert_eq!(mode, RedirectMode::Js);
            }
            _ => panic!("expected trackers create"),
        }
    }

    #[test]
    fn test_stats_start_end_imply_custom() {
        let cli = Cli::try_parse_from([
            "tracklink-admin",
            "stats",
            "--start",
            "2024-05-01",
            "--end",
            "2024-05-03",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Stats(args)) => assert_eq!(args.effective_period(), Period::Custom),
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn test_stats_start_requires_end() {
        assert!(Cli::try_parse_from(["tracklink-admin", "stats", "--start", "2024-05-01"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["tracklink-admin", "status", "-c", "/tmp/x.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/x.toml"));
    }
}
