//! Single-connection bootstrap with bounded retry
//!
//! Opens one MySQL connection per call. Used at request time, so the
//! worst case blocks the caller for `(attempts - 1) x delay`.

use futures::future::BoxFuture;
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

use super::error::DbError;
use super::retry::retry_fixed;
use crate::config::DbConfig;

/// Connection factory for a configured database
#[derive(Debug, Clone)]
pub struct Connector {
    config: DbConfig,
}

impl Connector {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Open a connection, retrying on failure.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] once every attempt has failed.
    pub async fn connect(&self) -> Result<MySqlConnection, DbError> {
        let options = self.config.connect_options();
        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.database,
            attempts = self.config.retry.attempts(),
            max_wait = ?self.config.retry.max_wait(),
            "connecting to database"
        );

        retry_fixed(self.config.retry, |attempt| {
            let options = &options;
            async move {
                tracing::trace!(attempt, "opening connection");
                MySqlConnection::connect_with(options).await
            }
        })
        .await
        .map_err(|exhausted| DbError::Connection {
            attempts: exhausted.attempts,
            source: exhausted.last,
        })
    }

    /// Run `f` on a fresh connection, then close it.
    ///
    /// The connection is closed whether `f` succeeds or fails. A failed close
    /// is logged and never replaces the result of `f`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let users = connector
    ///     .with_connection(|conn| Box::pin(async move { UserRepo::new(conn).list().await }))
    ///     .await?;
    /// ```
    pub async fn with_connection<T, F>(&self, f: F) -> Result<T, DbError>
    where
        F: for<'c> FnOnce(&'c mut MySqlConnection) -> BoxFuture<'c, Result<T, DbError>>,
    {
        let mut conn = self.connect().await?;
        let result = f(&mut conn).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn unreachable_database_exhausts_retries() {
        let connector = Connector::new(DbConfig::unreachable(3));

        let err = connector.connect().await.unwrap_err();

        assert!(err.is_connection());
        assert_eq!(err.to_string(), "could not connect after retries");
        match err {
            DbError::Connection { attempts, .. } => assert_eq!(attempts, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn with_connection_skips_body_when_connect_fails() {
        let connector = Connector::new(DbConfig::unreachable(2));
        let ran = AtomicBool::new(false);

        let result = connector
            .with_connection(|_conn| {
                ran.store(true, Ordering::SeqCst);
                Box::pin(async { Ok::<_, DbError>(()) })
            })
            .await;

        assert!(result.unwrap_err().is_connection());
        assert!(!ran.load(Ordering::SeqCst));
    }
}
