//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use userbase_server::{run_server, DbConfig, MySqlStore, ServerConfig};

/// Arguments for the serve command
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind to (default: all interfaces, port 5000)
    #[arg(long, short = 'b', env = "USERBASE_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, db_config: DbConfig) -> Result<()> {
    tracing::info!(
        bind = %args.bind,
        db_host = %db_config.host,
        database = %db_config.database,
        "Starting userbase server"
    );

    // No connection is opened here; each request connects on its own.
    let store = Arc::new(MySqlStore::from_config(db_config));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
