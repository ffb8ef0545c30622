use std::process::ExitCode;

use clap::Parser;

use tracklink_admin::cli::Cli;
#[cfg(feature = "cli")]
use tracklink_admin::cli::{Commands, ConfigCommands};
use tracklink_admin::runtime::lifetime::startup;
use tracklink_admin::runtime::modes::{self, Mode};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 生成配置文件不依赖现有配置
    #[cfg(feature = "cli")]
    if let Some(Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    }) = &cli.command
    {
        return match tracklink_admin::interfaces::cli::commands::config_gen::config_generate(
            output_path.clone(),
            *force,
        ) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e.format_colored());
                ExitCode::FAILURE
            }
        };
    }

    let mode = modes::detect_mode(cli.command.as_ref());
    let startup = match startup::prepare(cli.config.as_deref(), mode) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };
    let ctx = startup.ctx.clone();

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(ctx).await {
                eprintln!("TUI error: {:?}", e);
                return ExitCode::FAILURE;
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            if let Some(command) = cli.command
                && let Err(e) = modes::run_cli(ctx, command).await
            {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
        Mode::Unknown => {
            eprintln!("No interface enabled. Build with the `cli` or `tui` feature.");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
