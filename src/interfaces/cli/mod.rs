//! CLI interface module
//!
//! Non-interactive commands over the same clients the TUI uses.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{
    CampaignCommands, ChannelCommands, Commands, ConfigCommands, SiteCommands, TargetCommands,
    TokenCommands, TrackerCommands,
};
use crate::context::AppContext;
use crate::errors::AdminError;
use commands::{campaigns, channels, config_gen, session, sites, stats, targets, tokens, trackers};

#[derive(Debug)]
pub enum CliError {
    /// Backend or transport failure
    RpcError(AdminError),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::RpcError(err) => err.format_simple(),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::RpcError(err) => err.format_colored(),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<AdminError> for CliError {
    fn from(err: AdminError) -> Self {
        CliError::RpcError(err)
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(ctx: Arc<AppContext>, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Login {
            username,
            password_stdin,
        } => session::login(&ctx, username, password_stdin).await,

        Commands::Logout => session::logout(&ctx),

        Commands::Status => session::status(&ctx),

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_gen::config_generate(output_path, force)
            }
        },

        // 以下命令都需要已登录的会话
        cmd => {
            session::require_session(&ctx)?;
            run_protected(&ctx, cmd).await
        }
    }
}

async fn run_protected(ctx: &AppContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Trackers { action } => match action {
            TrackerCommands::List { output } => trackers::list(ctx, output).await,
            TrackerCommands::Create { name, kind, mode } => {
                trackers::create(ctx, name, kind, mode).await
            }
            TrackerCommands::Update {
                id,
                name,
                mode,
                status,
            } => trackers::update(ctx, id, name, mode, status).await,
            TrackerCommands::Delete { id, yes } => trackers::delete(ctx, id, yes).await,
        },

        Commands::Campaigns { action } => match action {
            CampaignCommands::List { tracker, output } => {
                campaigns::list(ctx, tracker, output).await
            }
            CampaignCommands::Create { tracker, name } => {
                campaigns::create(ctx, tracker, name).await
            }
        },

        Commands::Channels { action } => match action {
            ChannelCommands::List {
                tracker,
                campaign,
                output,
            } => channels::list(ctx, tracker, campaign, output).await,
            ChannelCommands::Create {
                tracker,
                campaign,
                name,
                source,
                medium,
                tags,
            } => channels::create(ctx, tracker, campaign, name, source, medium, tags).await,
            ChannelCommands::Import { file_path } => channels::import(ctx, file_path).await,
        },

        Commands::Targets { action } => match action {
            TargetCommands::List { tracker, output } => targets::list(ctx, tracker, output).await,
            TargetCommands::Create { tracker, url } => targets::create(ctx, tracker, url).await,
        },

        Commands::Sites { action } => match action {
            SiteCommands::List { output } => sites::list(ctx, output).await,
            SiteCommands::Create { name, domain } => sites::create(ctx, name, domain).await,
        },

        Commands::Tokens { action } => match action {
            TokenCommands::List { output } => tokens::list(ctx, output).await,
            TokenCommands::Generate {
                tracker,
                target,
                campaign,
                channel,
                mode,
            } => tokens::generate(ctx, tracker, target, campaign, channel, mode).await,
            TokenCommands::Delete { id, yes } => tokens::delete(ctx, id, yes).await,
        },

        Commands::Stats(args) => stats::show(ctx, args).await,

        Commands::Login { .. } | Commands::Logout | Commands::Status | Commands::Config { .. } => {
            unreachable!("handled in run_cli_command")
        }

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
