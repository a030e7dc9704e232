//! Domain records shared by the database layer and HTTP responses

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// `id` is assigned by the storage engine (AUTO_INCREMENT) and never reused.
/// `name` is at most 64 characters; the column definition enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Outcome of schema initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStatus {
    /// `CREATE TABLE IF NOT EXISTS users` completed
    pub table_ensured: bool,
    /// Seed insert was issued and committed
    pub seed_attempted: bool,
}
