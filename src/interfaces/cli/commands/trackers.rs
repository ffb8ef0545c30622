//! Tracker commands

use colored::Colorize;

use super::helpers::{confirm, fetch_list, print_empty, print_json_if, print_total};
use crate::cli::OutputArgs;
use crate::client::TrackerClient;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{
    CreateTrackerParams, NoParams, RedirectMode, Status, Tracker, TrackerType,
    UpdateTrackerParams,
};
use crate::rpc::methods;
use crate::utils::format_timestamp;

fn status_colored(status: &Status) -> String {
    if status.is_active() {
        status.as_str().green().to_string()
    } else {
        status.as_str().yellow().to_string()
    }
}

pub async fn list(ctx: &AppContext, output: OutputArgs) -> Result<(), CliError> {
    let trackers: Vec<Tracker> = fetch_list(ctx, methods::TRACKER_LIST, &NoParams {}).await?;
    if print_json_if(output, &trackers)? {
        return Ok(());
    }

    if trackers.is_empty() {
        print_empty("trackers");
        return Ok(());
    }

    println!("{}", "Trackers:".bold().green());
    println!();
    for t in &trackers {
        println!(
            "  {}  {} [{}] {} {}",
            t.id.dimmed(),
            t.name.cyan().bold(),
            t.kind.as_ref().magenta(),
            t.mode.label().blue(),
            status_colored(&t.status)
        );
        if !t.created_at.is_empty() {
            println!(
                "      {}",
                format!("created {}", format_timestamp(&t.created_at)).dimmed()
            );
        }
    }
    print_total(trackers.len(), "trackers");
    Ok(())
}

pub async fn create(
    ctx: &AppContext,
    name: String,
    kind: TrackerType,
    mode: RedirectMode,
) -> Result<(), CliError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CliError::ParseError("Tracker name is required".to_string()));
    }

    let client = TrackerClient::new(ctx.rpc());
    let tracker = client
        .create(&CreateTrackerParams { name, kind, mode })
        .await?;

    println!(
        "{} Created tracker {} ({})",
        "✓".bold().green(),
        tracker.name.cyan(),
        tracker.id.dimmed()
    );
    Ok(())
}

/// Omitted fields keep their current values.
pub async fn update(
    ctx: &AppContext,
    id: String,
    name: Option<String>,
    mode: Option<RedirectMode>,
    status: Option<Status>,
) -> Result<(), CliError> {
    let trackers: Vec<Tracker> = fetch_list(ctx, methods::TRACKER_LIST, &NoParams {}).await?;
    let current = trackers
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CliError::CommandError(format!("Tracker not found: {}", id)))?;

    let params = UpdateTrackerParams {
        id: current.id,
        name: name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or(current.name),
        mode: mode.unwrap_or(current.mode),
        status: status.unwrap_or(current.status),
    };

    let client = TrackerClient::new(ctx.rpc());
    let tracker = client.update(&params).await?;

    println!(
        "{} Updated tracker {}: {} {}",
        "✓".bold().green(),
        tracker.name.cyan(),
        tracker.mode.label().blue(),
        status_colored(&tracker.status)
    );
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: String, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete tracker {}?", id))? {
        println!("{} Cancelled", "ℹ".bold().blue());
        return Ok(());
    }

    let client = TrackerClient::new(ctx.rpc());
    client.delete(&id).await?;

    println!("{} Deleted tracker {}", "✓".bold().green(), id.cyan());
    Ok(())
}
