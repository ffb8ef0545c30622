//! Channel commands

use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;

use super::helpers::{fetch_list, or_dash, print_empty, print_json_if, print_total};
use crate::cli::OutputArgs;
use crate::client::ChannelClient;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{Channel, ChannelFilter, CreateChannelParams};
use crate::rpc::methods;

/// Parse repeated `KEY=VALUE` flags; empty keys are rejected.
pub fn parse_tags(raw: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    let mut tags = BTreeMap::new();
    for item in raw {
        let (key, value) = item.split_once('=').ok_or_else(|| {
            CliError::ParseError(format!("Invalid tag '{}', expected KEY=VALUE", item))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::ParseError(format!("Empty tag key in '{}'", item)));
        }
        tags.insert(key.to_string(), value.trim().to_string());
    }
    Ok(tags)
}

/// The import file must hold a JSON array of channel objects.
pub fn parse_import(content: &str) -> Result<Vec<Value>, CliError> {
    match serde_json::from_str::<Value>(content.trim()) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(CliError::ParseError(
            "Import file must contain a JSON array".to_string(),
        )),
        Err(e) => Err(CliError::ParseError(format!("Invalid JSON: {}", e))),
    }
}

pub async fn list(
    ctx: &AppContext,
    tracker: Option<String>,
    campaign: Option<String>,
    output: OutputArgs,
) -> Result<(), CliError> {
    let filter = ChannelFilter {
        tracker_id: tracker,
        campaign_id: campaign,
    };
    let channels: Vec<Channel> = fetch_list(ctx, methods::CHANNEL_LIST, &filter).await?;
    if print_json_if(output, &channels)? {
        return Ok(());
    }

    if channels.is_empty() {
        print_empty("channels");
        return Ok(());
    }

    println!("{}", "Channels:".bold().green());
    println!();
    for ch in &channels {
        println!(
            "  {}  {} {}/{}",
            ch.id.dimmed(),
            ch.name.cyan().bold(),
            or_dash(&ch.source).blue(),
            or_dash(&ch.medium).blue()
        );
        println!(
            "      {}",
            format!("campaign={} tracker={}", ch.campaign_id, ch.tracker_id).dimmed()
        );
        if !ch.tags.is_empty() {
            println!("      {} {}", "tags:".dimmed(), ch.tags_display().yellow());
        }
    }
    print_total(channels.len(), "channels");
    Ok(())
}

pub async fn create(
    ctx: &AppContext,
    tracker: String,
    campaign: String,
    name: String,
    source: String,
    medium: String,
    tags: Vec<String>,
) -> Result<(), CliError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CliError::ParseError("Channel name is required".to_string()));
    }

    let params = CreateChannelParams {
        tracker_id: tracker,
        campaign_id: campaign,
        name,
        source: source.trim().to_string(),
        medium: medium.trim().to_string(),
        tags: parse_tags(&tags)?,
    };

    let client = ChannelClient::new(ctx.rpc());
    let channel = client.create(&params).await?;

    println!(
        "{} Created channel {} ({})",
        "✓".bold().green(),
        channel.name.cyan(),
        channel.id.dimmed()
    );
    Ok(())
}

pub async fn import(ctx: &AppContext, file_path: String) -> Result<(), CliError> {
    let content = fs::read_to_string(&file_path).map_err(|e| {
        CliError::CommandError(format!("Failed to read '{}': {}", file_path, e))
    })?;
    let channels = parse_import(&content)?;

    println!(
        "{} Importing {} channels from {}",
        "ℹ".bold().blue(),
        channels.len().to_string().cyan(),
        file_path.dimmed()
    );

    let client = ChannelClient::new(ctx.rpc());
    let imported = client.batch_import(channels).await?;

    println!(
        "{} Imported {} channels",
        "✓".bold().green(),
        imported.to_string().green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        let tags = parse_tags(&["utm=spring".to_string(), " region = eu ".to_string()]).unwrap();
        assert_eq!(tags.get("utm").map(String::as_str), Some("spring"));
        assert_eq!(tags.get("region").map(String::as_str), Some("eu"));

        assert!(parse_tags(&["novalue".to_string()]).is_err());
        assert!(parse_tags(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_tag_value_may_contain_equals() {
        let tags = parse_tags(&["q=a=b".to_string()]).unwrap();
        assert_eq!(tags.get("q").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_parse_import_requires_array() {
        assert_eq!(parse_import(r#"[{"name":"a"}]"#).unwrap().len(), 1);
        assert!(parse_import(r#"{"name":"a"}"#).is_err());
        assert!(parse_import("not json").is_err());
    }
}
