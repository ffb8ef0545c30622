//! Stats command: the dashboard summary as text or JSON

use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use super::helpers::print_json_if;
use crate::analytics::{DashboardView, DateRange, Period, today_utc};
use crate::cli::StatsArgs;
use crate::context::AppContext;
use crate::errors::AdminError;
use crate::interfaces::cli::CliError;
use crate::models::{ClickStatsQuery, ClickStatsResponse, EventStatsQuery, EventStatsResponse};
use crate::rpc::methods;

const BAR_WIDTH: u64 = 30;

#[derive(Serialize)]
struct StatsOutput<'a> {
    start_date: String,
    end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    clicks_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events_error: Option<String>,
    #[serde(flatten)]
    view: &'a DashboardView,
}

/// Resolve the inclusive range for the requested period
pub fn resolve_range(args: &StatsArgs) -> Result<DateRange, CliError> {
    match args.effective_period() {
        Period::Custom => {
            let (Some(start), Some(end)) = (args.start.as_deref(), args.end.as_deref()) else {
                return Err(CliError::ParseError(
                    "Custom period needs --start and --end".to_string(),
                ));
            };
            DateRange::parse(start, end)
                .filter(|r| r.start <= r.end)
                .ok_or_else(|| CliError::ParseError("Invalid date range".to_string()))
        }
        period => period
            .range_ending(today_utc())
            .ok_or_else(|| CliError::ParseError("Invalid date range".to_string())),
    }
}

fn keep_ok<T>(what: &str, result: Result<T, AdminError>) -> (Option<T>, Option<String>) {
    match result {
        Ok(value) => (Some(value), None),
        Err(e) => {
            warn!("Failed to load {} stats: {}", what, e);
            (None, Some(e.message().to_string()))
        }
    }
}

pub async fn show(ctx: &AppContext, args: StatsArgs) -> Result<(), CliError> {
    let range = resolve_range(&args)?;

    let clicks_query = ClickStatsQuery {
        start_date: range.start_str(),
        end_date: range.end_str(),
        tracker_id: args.tracker.clone(),
        campaign_id: args.campaign.clone(),
        channel_id: args.channel.clone(),
    };
    let events_query = EventStatsQuery {
        start_date: range.start_str(),
        end_date: range.end_str(),
        site_id: args.site.clone(),
    };

    // 两个查询相互独立，一个失败不影响另一个
    let rpc = ctx.rpc();
    let (clicks, events) = tokio::join!(
        rpc.call_with::<_, ClickStatsResponse>(methods::STATS_CLICKS, &clicks_query),
        rpc.call_with::<_, EventStatsResponse>(methods::STATS_EVENTS, &events_query),
    );
    let (clicks, clicks_error) = keep_ok("click", clicks);
    let (events, events_error) = keep_ok("event", events);

    if clicks.is_none() && events.is_none() {
        return Err(CliError::CommandError(format!(
            "Failed to load stats: {}",
            clicks_error.unwrap_or_default()
        )));
    }

    let view = DashboardView::build(clicks.as_ref(), events.as_ref(), ctx.view_options());

    let output = StatsOutput {
        start_date: range.start_str(),
        end_date: range.end_str(),
        clicks_error,
        events_error,
        view: &view,
    };
    if print_json_if(args.output, &output)? {
        return Ok(());
    }

    print_view(&output);
    Ok(())
}

fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH).div_ceil(max).min(BAR_WIDTH) as usize;
    "█".repeat(len)
}

fn print_view(output: &StatsOutput<'_>) {
    let view = output.view;

    println!(
        "{} {} → {}",
        "Analytics".bold().green(),
        output.start_date.cyan(),
        output.end_date.cyan()
    );
    for err in [&output.clicks_error, &output.events_error].into_iter().flatten() {
        println!("{} {}", "⚠".bold().yellow(), err.yellow());
    }
    println!();

    for card in &view.cards {
        println!("  {:<16} {}", format!("{}:", card.label).cyan(), card.value.bold());
    }

    if !view.trend.is_empty() {
        println!();
        println!("{}", "Trend (clicks + events)".bold());
        let max = view.trend.iter().map(|p| p.total()).max().unwrap_or(0);
        for point in &view.trend {
            println!(
                "  {}  {:>7} {:>7}  {}",
                point.date.dimmed(),
                point.clicks.to_string().blue(),
                point.events.to_string().magenta(),
                bar(point.total(), max).green()
            );
        }
    }

    for ranking in view.rankings.iter().filter(|r| !r.items.is_empty()) {
        println!();
        println!("{}", ranking.title.bold());
        for (i, item) in ranking.items.iter().enumerate() {
            println!("  {:>2}. {:<32} {}", i + 1, item.name, item.count.to_string().cyan());
        }
    }

    for dist in view.distributions.iter().filter(|d| d.total > 0) {
        println!();
        println!("{}", dist.title.bold());
        for slice in &dist.slices {
            println!(
                "  {:<24} {:>7} {:>4}%",
                slice.name,
                slice.count.to_string().cyan(),
                dist.percent(slice)
            );
        }
    }

    if view.has_hourly_data() {
        println!();
        println!("{}", "Hourly".bold());
        let max = view.hourly.iter().map(|h| h.total()).max().unwrap_or(0);
        for h in &view.hourly {
            println!(
                "  {:02}:00 {:>7}  {}",
                h.hour,
                h.total().to_string().cyan(),
                bar(h.total(), max).green()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn stats_args(argv: &[&str]) -> StatsArgs {
        let mut full = vec!["tracklink-admin", "stats"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Some(Commands::Stats(args)) => args,
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn test_custom_range() {
        let range = resolve_range(&stats_args(&["--start", "2024-05-01", "--end", "2024-05-03"]))
            .unwrap();
        assert_eq!(range.start_str(), "2024-05-01");
        assert_eq!(range.end_str(), "2024-05-03");
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(resolve_range(&stats_args(&["--start", "2024-05-03", "--end", "2024-05-01"])).is_err());
        assert!(resolve_range(&stats_args(&["--period", "custom"])).is_err());
    }

    #[test]
    fn test_preset_range_ends_today() {
        let range = resolve_range(&stats_args(&["--period", "30d"])).unwrap();
        assert_eq!(range.end, today_utc());
        assert_eq!((range.end - range.start).num_days(), 29);
    }

    #[test]
    fn test_bar_scales() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH as usize);
        assert_eq!(bar(1, 10).chars().count(), 3);
    }
}
