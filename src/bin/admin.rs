//! CLI administration tool for bloglist.
//!
//! Provides commands for managing users, viewing list statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing fields)
//! cargo run --bin admin -- user create --username root --name Superuser
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Like and authorship statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//! - `BCRYPT_COST` (optional): work factor for new password hashes (default: 10)

use bloglist::application::services::{BlogService, UserService};
use bloglist::config::{Config, bcrypt_cost_from_env, mask_connection_string};
use bloglist::infrastructure::persistence::{PgBlogRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bloglist.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show like and authorship statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Login name (3-30 letters, digits or underscores)
        #[arg(short, long)]
        username: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn user_service(pool: &PgPool) -> Result<UserService<PgUserRepository, PgBlogRepository>> {
    let pool = Arc::new(pool.clone());

    let bcrypt_cost = bcrypt_cost_from_env()?;

    Ok(UserService::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgBlogRepository::new(pool)),
        bcrypt_cost,
    ))
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = user_service(pool)?;

    match action {
        UserAction::Create {
            username,
            name,
            yes,
        } => create_user(&service, username, name, yes).await?,
        UserAction::List => list_users(&service).await?,
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// The password is read from a hidden prompt. Validation is the same as for
/// `POST /api/users`.
async fn create_user(
    service: &UserService<PgUserRepository, PgBlogRepository>,
    username: Option<String>,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Name:     {}", name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .register(username, name, Some(password))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ User created with id".green().bold(),
        user.id.to_string().bright_white().bold()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" -d '{{\"username\":\"{}\",\"password\":\"...\"}}' http://localhost:3000/api/login",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users with their blog counts.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Name                           Blogs
///   ───────────────────────────────────────────────────────────────
///   1   root                 Superuser                      0
///   2   mluukkai             Matti Luukkainen               3
/// ```
async fn list_users(service: &UserService<PgUserRepository, PgBlogRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {:<5}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Name".bright_white().bold(),
        "Blogs".bright_white().bold()
    );
    println!("  {}", "─".repeat(63).bright_black());

    for entry in &users {
        println!(
            "  {:<3} {:<20} {:<30} {}",
            entry.user.id.to_string().bright_black(),
            entry.user.username.cyan(),
            entry.user.name,
            entry.blogs.len().to_string().bright_green()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays the same statistics as `GET /api/blogs/stats`.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = BlogService::new(Arc::new(PgBlogRepository::new(Arc::new(pool.clone()))));

    let stats = service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    println!(
        "  Total likes:   {}",
        stats.total_likes.to_string().bright_green().bold()
    );

    match &stats.favorite_blog {
        Some(blog) => println!(
            "  Favorite blog: {} by {} ({} likes)",
            blog.title.cyan(),
            blog.author,
            blog.likes.to_string().bright_green()
        ),
        None => println!("  Favorite blog: {}", "none".bright_black()),
    }

    match &stats.most_blogs {
        Some(tally) => println!(
            "  Most blogs:    {} ({} blogs)",
            tally.author.cyan(),
            tally.value.to_string().bright_green()
        ),
        None => println!("  Most blogs:    {}", "none".bright_black()),
    }

    match &stats.most_likes {
        Some(tally) => println!(
            "  Most likes:    {} ({} likes)",
            tally.author.cyan(),
            tally.value.to_string().bright_green()
        ),
        None => println!("  Most likes:    {}", "none".bright_black()),
    }

    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;
            let blogs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
                .fetch_one(pool)
                .await?;
            let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Users:      {}", users.to_string().bright_green());
            println!("  Blogs:      {}", blogs.to_string().bright_green());
            println!("  Comments:   {}", comments.to_string().bright_green());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            bloglist::server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
