//! Target commands

use colored::Colorize;

use super::helpers::{fetch_list, print_empty, print_json_if, print_total};
use crate::cli::OutputArgs;
use crate::client::TargetClient;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{CreateTargetParams, Target, TrackerFilter};
use crate::rpc::methods;

pub async fn list(
    ctx: &AppContext,
    tracker: Option<String>,
    output: OutputArgs,
) -> Result<(), CliError> {
    let targets: Vec<Target> =
        fetch_list(ctx, methods::TARGET_LIST, &TrackerFilter::new(tracker)).await?;
    if print_json_if(output, &targets)? {
        return Ok(());
    }

    if targets.is_empty() {
        print_empty("targets");
        return Ok(());
    }

    println!("{}", "Targets:".bold().green());
    println!();
    for t in &targets {
        println!(
            "  {}  {} {}",
            t.id.dimmed(),
            t.url.blue().underline(),
            format!("tracker={}", t.tracker_id).dimmed()
        );
    }
    print_total(targets.len(), "targets");
    Ok(())
}

pub async fn create(ctx: &AppContext, tracker: String, url: String) -> Result<(), CliError> {
    let url = url.trim().to_string();
    if url.is_empty() {
        return Err(CliError::ParseError("Target URL is required".to_string()));
    }

    let client = TargetClient::new(ctx.rpc());
    let target = client
        .create(&CreateTargetParams {
            tracker_id: tracker,
            url,
        })
        .await?;

    println!(
        "{} Created target {} ({})",
        "✓".bold().green(),
        target.url.blue().underline(),
        target.id.dimmed()
    );
    Ok(())
}
