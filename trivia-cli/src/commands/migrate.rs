//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Insert the default categories (Science, Art, ...) if missing
    #[arg(long)]
    pub seed_categories: bool,
}

/// Create tables, then optionally seed categories
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if args.seed_categories {
        let inserted = migrations::seed_categories(&pool)
            .await
            .context("Failed to seed categories")?;
        println!("Seeded {} categories", inserted);
    }

    println!("Migrations complete");
    Ok(())
}
