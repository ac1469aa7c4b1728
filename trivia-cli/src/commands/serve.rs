//! HTTP server command
//!
//! Runs the trivia API against PostgreSQL, or against an in-memory store
//! seeded with the default categories when `--memory` is given.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::db::{create_pool_with_options, migrations};
use trivia_server::models::DEFAULT_PER_PAGE;
use trivia_server::{run_server, MemoryStore, PgStore, ServerConfig, TriviaStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Questions per page on paginated endpoints
    #[arg(
        long,
        env = "TRIVIA_PER_PAGE",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub per_page: u32,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep everything in memory instead of using PostgreSQL (data is lost on exit)
    #[arg(long)]
    pub memory: bool,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TriviaStore> = if args.memory {
        if args.database_url.is_some() {
            tracing::warn!("--memory given; ignoring DATABASE_URL");
        }
        tracing::info!("Using in-memory store");
        Arc::new(MemoryStore::with_default_categories())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env (or pass --memory)")?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }
        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        per_page: args.per_page,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
