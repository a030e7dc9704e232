//! One-shot schema bootstrap

use anyhow::{Context, Result};

use userbase_server::http::routes::init::INIT_INFO;
use userbase_server::{DbConfig, MySqlStore, UserStore};

pub async fn run_init(db_config: DbConfig) -> Result<()> {
    let store = MySqlStore::from_config(db_config);
    let status = store
        .initialize()
        .await
        .context("Failed to initialize users table")?;

    tracing::debug!(?status, "initialize finished");
    println!("ok: {}", INIT_INFO);
    Ok(())
}
