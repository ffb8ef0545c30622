//! Shared helpers for CLI commands

use colored::Colorize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, BufRead, Write};

use crate::cli::OutputArgs;
use crate::context::AppContext;
use crate::interfaces::cli::CliError;

/// Fetch a list directly so backend errors reach the user.
///
/// A `null` result is treated as an empty list.
pub async fn fetch_list<P, T>(ctx: &AppContext, method: &str, params: &P) -> Result<Vec<T>, CliError>
where
    P: Serialize + ?Sized + Sync,
    T: DeserializeOwned,
{
    let items: Option<Vec<T>> = ctx.rpc().call_with(method, params).await?;
    Ok(items.unwrap_or_default())
}

/// Print as pretty JSON when `--json` was given. Returns whether it printed.
pub fn print_json_if<T: Serialize + ?Sized>(output: OutputArgs, value: &T) -> Result<bool, CliError> {
    if !output.json {
        return Ok(false);
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::CommandError(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(true)
}

/// Ask for y/N confirmation on stdin
pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} {} (y/N): ", "⚠".bold().yellow(), prompt);
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| CliError::CommandError(format!("Failed to read input: {}", e)))?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn print_empty(what: &str) {
    println!("{} No {} found", "ℹ".bold().blue(), what);
}

pub fn print_total(count: usize, what: &str) {
    println!();
    println!(
        "{} Total {} {}",
        "ℹ".bold().blue(),
        count.to_string().green(),
        what
    );
}

/// `-` for empty optional values
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
