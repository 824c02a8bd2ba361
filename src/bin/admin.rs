//! CLI administration tool for pathfinder-web.
//!
//! Inspects and manages sessions in the Redis session store without going
//! through the website.
//!
//! # Usage
//!
//! ```bash
//! # Show a session and what the landing page would do with it
//! cargo run --bin admin -- session show <token>
//!
//! # Seed a session for manual testing (token generated if omitted)
//! cargo run --bin admin -- session put --identity alice --ttl 3600
//!
//! # Clear identity and expiry of a session
//! cargo run --bin admin -- session clear <token>
//!
//! # Check the Redis connection
//! cargo run --bin admin -- redis check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST` (required): Redis connection
//! - `SESSION_KEY_PREFIX` (optional): key namespace, default `session:`

use pathfinder_web::config::{Config, mask_connection_string};
use pathfinder_web::domain::entities::{SessionRecord, SessionStatus};
use pathfinder_web::domain::repositories::SessionStore;
use pathfinder_web::infrastructure::session::RedisSessionStore;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing pathfinder-web sessions.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Redis operations
    Redis {
        #[command(subcommand)]
        action: RedisAction,
    },
}

/// Session subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Show a session and its current status
    Show {
        /// Session token (cookie value)
        token: String,
    },

    /// Store a logged-in session
    Put {
        /// Session token (auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Identity (username) to attach
        #[arg(short, long)]
        identity: Option<String>,

        /// Seconds until the identity expires
        #[arg(long, default_value_t = 3600)]
        ttl: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Clear identity and expiry from a session
    Clear {
        /// Session token (cookie value)
        token: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Redis subcommands.
#[derive(Subcommand)]
enum RedisAction {
    /// Check the Redis connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let redis_url = config
        .redis_url
        .clone()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let store = RedisSessionStore::connect(&redis_url, config.session_key_prefix.clone())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&redis_url)
            )
        })?;

    match cli.command {
        Commands::Session { action } => {
            handle_session_action(action, &store, &config.session_cookie).await?
        }
        Commands::Redis { action } => handle_redis_action(action, &store, &redis_url).await?,
    }

    Ok(())
}

/// Dispatches session commands.
async fn handle_session_action(
    action: SessionAction,
    store: &RedisSessionStore,
    cookie_name: &str,
) -> Result<()> {
    match action {
        SessionAction::Show { token } => show_session(store, &token).await,
        SessionAction::Put {
            token,
            identity,
            ttl,
            yes,
        } => put_session(store, cookie_name, token, identity, ttl, yes).await,
        SessionAction::Clear { token, yes } => clear_session(store, &token, yes).await,
    }
}

/// Prints a session and the landing page outcome for it right now.
async fn show_session(store: &RedisSessionStore, token: &str) -> Result<()> {
    println!("{}", "Session".bright_blue().bold());
    println!();

    let record = store
        .get(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read session: {}", e))?;

    let Some(record) = record else {
        println!("{}", "  No session found".yellow());
        return Ok(());
    };

    let now = Utc::now().timestamp();
    let status = match record.status_at(now) {
        SessionStatus::Active => "ACTIVE".green(),
        SessionStatus::Expired => "EXPIRED".red(),
        SessionStatus::Anonymous => "ANONYMOUS".bright_black(),
    };

    println!("  Token:    {}", token.bright_black());
    println!(
        "  Identity: {}",
        record.identity.as_deref().unwrap_or("-").cyan()
    );
    println!("  Expires:  {}", format_expiry(record.expires_at));
    println!("  Status:   {}", status);
    println!();

    Ok(())
}

/// Seeds a logged-in session with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for identity (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display session details
/// 4. Confirm (unless `--yes` flag)
/// 5. Store in Redis and print the cookie to use
async fn put_session(
    store: &RedisSessionStore,
    cookie_name: &str,
    token: Option<String>,
    identity: Option<String>,
    ttl: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create Session".bright_blue().bold());
    println!();

    let identity = match identity {
        Some(i) => i,
        None => Input::new().with_prompt("Identity").interact_text()?,
    };

    let token = match token {
        Some(t) => t,
        None => {
            let generated = generate_token();
            println!("{}", "Generated new session token".green());
            generated
        }
    };

    let expires_at = expiry_after(Utc::now().timestamp(), ttl)?;

    println!();
    println!("{}", "Session details:".bright_white().bold());
    println!("  Identity: {}", identity.cyan());
    println!("  Token:    {}", token.bright_yellow().bold());
    println!("  Expires:  {}", format_expiry(Some(expires_at)));
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Store this session?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    store
        .put(&token, SessionRecord::authenticated(identity, expires_at))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to store session: {}", e))?;

    println!();
    println!("{}", "Session stored".green().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -i -H \"Cookie: {}={}\" http://localhost:3000/",
        cookie_name,
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Clears a session with confirmation prompt (default: No).
async fn clear_session(store: &RedisSessionStore, token: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Clear Session".bright_blue().bold());
    println!();

    let record = store
        .get(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read session: {}", e))?
        .context("Session not found")?;

    let Some(identity) = record.identity else {
        println!("{}", "This session has no identity".yellow());
        return Ok(());
    };

    println!("  Identity: {}", identity.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Clear this session?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    store
        .clear(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear session: {}", e))?;

    println!();
    println!("{}", "Session cleared".green().bold());
    println!();

    Ok(())
}

/// Handles Redis diagnostic commands.
async fn handle_redis_action(
    action: RedisAction,
    store: &RedisSessionStore,
    redis_url: &str,
) -> Result<()> {
    match action {
        RedisAction::Check => {
            println!(
                "{} {}",
                "Checking Redis at".bright_blue(),
                mask_connection_string(redis_url)
            );

            if !store.health_check().await {
                anyhow::bail!("Redis PING failed");
            }

            println!("{}", "Redis connection OK".green().bold());
        }
    }

    Ok(())
}

/// Expiry timestamp `ttl` seconds after `now`.
fn expiry_after(now: i64, ttl: i64) -> Result<i64> {
    now.checked_add(ttl)
        .with_context(|| format!("TTL {} overflows the expiry timestamp", ttl))
}

/// Formats a Unix timestamp as UTC, or `never` when absent.
fn format_expiry(expires_at: Option<i64>) -> String {
    match expires_at {
        Some(ts) => DateTime::<Utc>::from_timestamp(ts, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| ts.to_string()),
        None => "never".to_string(),
    }
}

/// Generates a random session token.
///
/// # Format
///
/// - Length: 32 characters
/// - Character set: a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 32;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_after() {
        assert_eq!(expiry_after(1_700_000_000, 3600).unwrap(), 1_700_003_600);
        assert_eq!(expiry_after(1_700_000_000, -60).unwrap(), 1_699_999_940);
    }

    #[test]
    fn test_expiry_after_rejects_overflow() {
        assert!(expiry_after(1_700_000_000, i64::MAX).is_err());
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry(None), "never");
        assert_eq!(format_expiry(Some(0)), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_generate_token() {
        let token = generate_token();

        assert_eq!(token.len(), 32);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }
}
