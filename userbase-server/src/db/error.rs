//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Every connection attempt failed; `source` is the last driver error.
    #[error("could not connect after retries")]
    Connection {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// True when the retry loop gave up before any statement ran
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
