//! trivia CLI - runs the trivia HTTP service
//!
//! - `serve`: start the HTTP API (PostgreSQL or in-memory store)
//! - `migrate`: create the schema and optionally seed default categories
//!
//! Settings are read from flags, then environment variables, then a `.env`
//! file in the working directory or its parents.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question API server",
    long_about = "Serve a JSON API for browsing, searching, adding and deleting trivia \
                  questions, and for playing quizzes that never repeat a question."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create tables (and optionally seed categories) in the database
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug).ok();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
