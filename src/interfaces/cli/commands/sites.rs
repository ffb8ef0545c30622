//! Site commands

use colored::Colorize;

use super::helpers::{fetch_list, print_empty, print_json_if, print_total};
use crate::cli::OutputArgs;
use crate::client::SiteClient;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;
use crate::models::{CreateSiteParams, NoParams, Site};
use crate::rpc::methods;
use crate::utils::key_preview;

pub async fn list(ctx: &AppContext, output: OutputArgs) -> Result<(), CliError> {
    let sites: Vec<Site> = fetch_list(ctx, methods::SITE_LIST, &NoParams {}).await?;
    if print_json_if(output, &sites)? {
        return Ok(());
    }

    if sites.is_empty() {
        print_empty("sites");
        return Ok(());
    }

    println!("{}", "Sites:".bold().green());
    println!();
    for s in &sites {
        println!(
            "  {}  {} {} {} {}",
            s.id.dimmed(),
            s.name.cyan().bold(),
            s.domain.blue(),
            key_preview(&s.site_key).yellow(),
            s.status
        );
    }
    print_total(sites.len(), "sites");
    Ok(())
}

pub async fn create(ctx: &AppContext, name: String, domain: String) -> Result<(), CliError> {
    let name = name.trim().to_string();
    let domain = domain.trim().to_string();
    if name.is_empty() || domain.is_empty() {
        return Err(CliError::ParseError(
            "Site name and domain are required".to_string(),
        ));
    }

    let client = SiteClient::new(ctx.rpc());
    let site = client.create(&CreateSiteParams { name, domain }).await?;

    println!(
        "{} Created site {} ({})",
        "✓".bold().green(),
        site.name.cyan(),
        site.domain.blue()
    );
    // 完整 key 只在创建时展示
    println!("  {}: {}", "Site key".cyan(), site.site_key.bold());
    Ok(())
}
