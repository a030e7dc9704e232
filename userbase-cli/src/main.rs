//! userbase CLI - serve and bootstrap the userbase HTTP service
//!
//! Without a subcommand the HTTP server starts, bound to 0.0.0.0:5000.
//! Database settings come from the environment (or a `.env` file):
//! `DB_HOST`, `DB_PORT`, `MYSQL_USER`, `MYSQL_PASSWORD`, `MYSQL_DATABASE`,
//! `DB_CONNECT_ATTEMPTS`, `DB_CONNECT_DELAY_SECS`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use userbase_server::DbConfig;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "userbase",
    author,
    version,
    about = "Minimal users service over MySQL",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    serve: commands::serve::ServeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(commands::serve::ServeArgs),
    /// Ensure the users table and insert the seed row, then exit
    Init,
    /// Print all users as JSON
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let db_config = DbConfig::from_env();
    tracing::debug!(?db_config, "database configuration loaded");

    match cli.command.unwrap_or(Commands::Serve(cli.serve)) {
        Commands::Serve(args) => commands::run_serve(args, db_config).await?,
        Commands::Init => commands::run_init(db_config).await?,
        Commands::Users => commands::run_users(db_config).await?,
    }

    Ok(())
}
