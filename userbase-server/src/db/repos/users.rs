//! User repository - read side of the `users` table

use sqlx::mysql::MySqlConnection;

use crate::db::error::DbError;
use crate::models::User;

/// User repository over a borrowed connection
pub struct UserRepo<'a> {
    conn: &'a mut MySqlConnection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a mut MySqlConnection) -> Self {
        Self { conn }
    }

    /// Every row of `users`.
    ///
    /// No ORDER BY: callers must not rely on the order. An empty table gives
    /// an empty vector.
    pub async fn list(&mut self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name FROM users")
            .fetch_all(&mut *self.conn)
            .await?;

        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }
}
