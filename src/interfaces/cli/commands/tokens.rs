//! Token commands

use colored::Colorize;

use super::helpers::{confirm, fetch_list, print_empty, print_json_if, print_total};
use crate::cli::OutputArgs;
use crate::client::TokenClient;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{GenerateTokenParams, NoParams, RedirectMode, Token};
use crate::rpc::methods;
use crate::utils::short_id;

pub async fn list(ctx: &AppContext, output: OutputArgs) -> Result<(), CliError> {
    let tokens: Vec<Token> = fetch_list(ctx, methods::TOKEN_LIST, &NoParams {}).await?;
    if print_json_if(output, &tokens)? {
        return Ok(());
    }

    if tokens.is_empty() {
        print_empty("tokens");
        return Ok(());
    }

    println!("{}", "Tokens:".bold().green());
    println!();
    for t in &tokens {
        let mut parts = vec![
            format!("{}", t.short_code.cyan().bold()),
            format!("{}", t.tracking_url.blue().underline()),
            t.mode.label().to_string(),
        ];
        if let Some(campaign) = &t.campaign_id {
            parts.push(format!("campaign={}", short_id(campaign)).dimmed().to_string());
        }
        if let Some(channel) = &t.channel_id {
            parts.push(format!("channel={}", short_id(channel)).dimmed().to_string());
        }
        println!("  {}  {}", t.id.dimmed(), parts.join(" "));
    }
    print_total(tokens.len(), "tokens");
    Ok(())
}

pub async fn generate(
    ctx: &AppContext,
    tracker: String,
    target: String,
    campaign: Option<String>,
    channel: Option<String>,
    mode: RedirectMode,
) -> Result<(), CliError> {
    if channel.is_some() && campaign.is_none() {
        return Err(CliError::ParseError(
            "--channel requires --campaign".to_string(),
        ));
    }

    let params = GenerateTokenParams {
        tracker_id: tracker,
        campaign_id: campaign,
        channel_id: channel,
        target_id: target,
        mode,
    };

    let client = TokenClient::new(ctx.rpc());
    let token = client.generate(&params).await?;

    println!("{} Token generated", "✓".bold().green());
    println!("  {}:         {}", "Code".cyan(), token.short_code.bold());
    println!(
        "  {}: {}",
        "Tracking URL".cyan(),
        token.tracking_url.blue().underline()
    );
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: String, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete token {}?", id))? {
        println!("{} Cancelled", "ℹ".bold().blue());
        return Ok(());
    }

    let client = TokenClient::new(ctx.rpc());
    client.delete(&id).await?;

    println!("{} Deleted token {}", "✓".bold().green(), id.cyan());
    Ok(())
}
