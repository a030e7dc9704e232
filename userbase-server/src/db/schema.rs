//! Schema bootstrap - the `users` table and its seed row

use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

use super::error::DbError;
use crate::models::InitStatus;

/// Name of the row inserted by [`initialize`]
pub const SEED_USER_NAME: &str = "Bhanodhay";

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INT AUTO_INCREMENT PRIMARY KEY,
        name VARCHAR(64) NOT NULL
    )
"#;

// `name` carries no unique key, so the ON DUPLICATE KEY branch never fires
// and every call inserts another seed row.
const INSERT_SEED_USER: &str =
    "INSERT INTO users (name) VALUES (?) ON DUPLICATE KEY UPDATE name = name";

/// Ensure the `users` table exists and insert the seed row.
///
/// MySQL commits DDL implicitly, so only the seed insert runs inside the
/// transaction. Nothing from the insert is visible unless the commit lands.
pub async fn initialize(conn: &mut MySqlConnection) -> Result<InitStatus, DbError> {
    sqlx::query(CREATE_USERS_TABLE).execute(&mut *conn).await?;
    tracing::debug!("users table ensured");

    let mut tx = conn.begin().await?;
    let inserted = sqlx::query(INSERT_SEED_USER)
        .bind(SEED_USER_NAME)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(
        rows_affected = inserted.rows_affected(),
        seed = SEED_USER_NAME,
        "schema initialized"
    );

    Ok(InitStatus {
        table_ensured: true,
        seed_attempted: true,
    })
}
