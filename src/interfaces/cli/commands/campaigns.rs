//! Campaign commands

use colored::Colorize;

use super::helpers::{fetch_list, print_empty, print_json_if, print_total};
use crate::cli::OutputArgs;
use crate::client::CampaignClient;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{Campaign, CreateCampaignParams, TrackerFilter};
use crate::rpc::methods;

pub async fn list(
    ctx: &AppContext,
    tracker: Option<String>,
    output: OutputArgs,
) -> Result<(), CliError> {
    let campaigns: Vec<Campaign> =
        fetch_list(ctx, methods::CAMPAIGN_LIST, &TrackerFilter::new(tracker)).await?;
    if print_json_if(output, &campaigns)? {
        return Ok(());
    }

    if campaigns.is_empty() {
        print_empty("campaigns");
        return Ok(());
    }

    println!("{}", "Campaigns:".bold().green());
    println!();
    for c in &campaigns {
        println!(
            "  {}  {} {} {}",
            c.id.dimmed(),
            c.name.cyan().bold(),
            format!("tracker={}", c.tracker_id).dimmed(),
            c.status
        );
    }
    print_total(campaigns.len(), "campaigns");
    Ok(())
}

pub async fn create(ctx: &AppContext, tracker: String, name: String) -> Result<(), CliError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CliError::ParseError("Campaign name is required".to_string()));
    }

    let client = CampaignClient::new(ctx.rpc());
    let campaign = client
        .create(&CreateCampaignParams {
            tracker_id: tracker,
            name,
        })
        .await?;

    println!(
        "{} Created campaign {} ({})",
        "✓".bold().green(),
        campaign.name.cyan(),
        campaign.id.dimmed()
    );
    Ok(())
}
