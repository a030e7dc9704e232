//! Print every user as pretty JSON

use anyhow::{Context, Result};

use userbase_server::{DbConfig, MySqlStore, UserStore};

pub async fn run_users(db_config: DbConfig) -> Result<()> {
    let store = MySqlStore::from_config(db_config);
    let users = store.list_users().await.context("Failed to list users")?;

    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}
