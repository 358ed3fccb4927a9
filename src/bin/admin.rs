//! CLI administration tool for quotes-api.
//!
//! Provides maintenance commands that work directly against the SQLite
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection and apply migrations
//! cargo run --bin admin -- db check
//!
//! # View author and quote counts
//! cargo run --bin admin -- stats
//!
//! # Restore a soft-deleted author with its quotes
//! cargo run --bin admin -- authors restore 7
//!
//! # Permanently remove soft-deleted authors
//! cargo run --bin admin -- purge --yes
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite URL (default: `sqlite://quotes.db?mode=rwc`)

use quotes_api::AppState;
use quotes_api::config::Config;
use quotes_api::infrastructure::persistence::pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing quotes-api.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show author and quote counts
    Stats,

    /// Manage authors
    Authors {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Permanently delete soft-deleted authors and their quotes
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply pending migrations
    Check,
}

#[derive(Subcommand)]
enum AuthorAction {
    /// Restore a soft-deleted author together with its quotes
    Restore {
        /// Author ID
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let pool = pool::connect(
        &config.database_url,
        config.db_max_connections,
        config.acquire_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&pool).await?,
        },
        Commands::Stats => {
            pool::run_migrations(&pool).await?;
            show_stats(&AppState::with_sqlite(pool)).await?;
        }
        Commands::Authors { action } => match action {
            AuthorAction::Restore { id } => {
                pool::run_migrations(&pool).await?;
                restore_author(&AppState::with_sqlite(pool), id).await?;
            }
        },
        Commands::Purge { yes } => {
            pool::run_migrations(&pool).await?;
            purge(&AppState::with_sqlite(pool), yes).await?;
        }
    }

    Ok(())
}

/// Verifies connectivity and brings the schema up to date.
async fn db_check(pool: &sqlx::SqlitePool) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    sqlx::query("SELECT 1").fetch_one(pool).await?;
    println!("{}", "✅ Database connection OK".green().bold());

    pool::run_migrations(pool).await?;
    println!("{}", "✅ Migrations up to date".green().bold());

    Ok(())
}

/// Displays author and quote counts.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Authors:  12 (3 deleted)
///   Quotes:   40 (9 deleted)
/// ```
async fn show_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let authors_live = state.author_service.count_authors(false).await?;
    let authors_all = state.author_service.count_authors(true).await?;
    let quotes_live = state.quote_service.count_quotes(false).await?;
    let quotes_all = state.quote_service.count_quotes(true).await?;

    println!(
        "  Authors:  {} ({} deleted)",
        authors_live.to_string().bright_green().bold(),
        (authors_all - authors_live).to_string().bright_black()
    );
    println!(
        "  Quotes:   {} ({} deleted)",
        quotes_live.to_string().bright_green().bold(),
        (quotes_all - quotes_live).to_string().bright_black()
    );
    println!();

    Ok(())
}

async fn restore_author(state: &AppState, id: i64) -> Result<()> {
    println!("{}", "♻️  Restore Author".bright_blue().bold());
    println!();

    let author = state
        .author_service
        .restore_author(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to restore author: {}", e))?;

    println!("  ID:      {}", author.id.to_string().bright_black());
    println!("  Name:    {}", author.name.cyan());
    println!("  Surname: {}", author.surname.cyan());
    println!();
    println!("{}", "✅ Author restored with its quotes".green().bold());

    Ok(())
}

/// Hard-deletes every soft-deleted author after confirmation.
///
/// Quotes go with their author through the foreign key cascade.
async fn purge(state: &AppState, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Purge Deleted Authors".bright_blue().bold());
    println!();

    let deleted = state.author_service.count_authors(true).await?
        - state.author_service.count_authors(false).await?;

    if deleted == 0 {
        println!("{}", "  Nothing to purge".yellow());
        return Ok(());
    }

    println!(
        "  {} soft-deleted author(s) and their quotes will be removed permanently.",
        deleted.to_string().bright_white().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Purge them?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let purged = state
        .author_service
        .purge_deleted()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Purged authors:".green().bold(),
        purged.to_string().bright_white().bold()
    );

    Ok(())
}
