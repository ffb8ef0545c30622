//! Session commands: login, logout, status

use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::context::AppContext;
use crate::interfaces::cli::CliError;

/// Fail early when no session token is stored
pub fn require_session(ctx: &AppContext) -> Result<(), CliError> {
    ctx.auth().sync_from_storage();
    if ctx.auth().is_authenticated() {
        Ok(())
    } else {
        Err(CliError::CommandError(
            "Not signed in. Run `tracklink-admin login` first.".to_string(),
        ))
    }
}

fn read_line(prompt: &str) -> Result<String, CliError> {
    if !prompt.is_empty() {
        print!("{}", prompt);
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;
    }
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::CommandError(format!("Failed to read from stdin: {}", e)))?;
    Ok(line.trim().to_string())
}

/// 交互式输入密码
fn prompt_password() -> Result<String, CliError> {
    if !io::stdin().is_terminal() {
        return Err(CliError::CommandError(
            "No password provided. Use --password-stdin or run interactively.".to_string(),
        ));
    }

    print!("Password: ");
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    rpassword::read_password()
        .map_err(|e| CliError::CommandError(format!("Failed to read password: {}", e)))
}

pub async fn login(
    ctx: &AppContext,
    username: Option<String>,
    password_stdin: bool,
) -> Result<(), CliError> {
    let username = match username {
        Some(name) => name,
        None => read_line("Username: ")?,
    };
    if username.is_empty() {
        return Err(CliError::ParseError("Username is required".to_string()));
    }

    let password = if password_stdin {
        read_line("")?
    } else {
        prompt_password()?
    };
    if password.is_empty() {
        return Err(CliError::ParseError("Password is required".to_string()));
    }

    ctx.auth().login(ctx.rpc(), &username, &password).await?;

    println!(
        "{} Signed in as {}",
        "✓".bold().green(),
        username.cyan()
    );
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<(), CliError> {
    ctx.auth().sync_from_storage();
    if !ctx.auth().is_authenticated() {
        println!("{} Not signed in", "ℹ".bold().blue());
        return Ok(());
    }
    ctx.logout();
    println!("{} Signed out", "✓".bold().green());
    Ok(())
}

pub fn status(ctx: &AppContext) -> Result<(), CliError> {
    ctx.auth().sync_from_storage();
    let config = ctx.config();

    println!("{}", "Tracklink Admin".bold().green());
    println!("  {}:  {}", "Version".cyan(), env!("CARGO_PKG_VERSION"));
    println!("  {}: {}", "Endpoint".cyan(), config.rpc.endpoint);
    println!(
        "  {}:  {}",
        "Session".cyan(),
        if ctx.auth().is_authenticated() {
            "signed in".green()
        } else {
            "signed out".yellow()
        }
    );
    if config.session.ephemeral {
        println!("  {}:  {}", "Storage".cyan(), "memory".dimmed());
    } else {
        println!(
            "  {}:  {}",
            "Storage".cyan(),
            config.session.resolve_dir().display().to_string().dimmed()
        );
    }
    Ok(())
}
