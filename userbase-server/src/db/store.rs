//! User store trait and implementations
//!
//! Provides a trait for the two database-backed operations, with:
//! - MySQL implementation opening one connection per call
//! - In-memory implementation for testing

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::connector::Connector;
use super::error::DbError;
use super::repos::UserRepo;
use super::schema::{self, SEED_USER_NAME};
use crate::config::DbConfig;
use crate::models::{InitStatus, User};

/// Trait for user storage (testable)
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Ensure the table exists and insert the seed row
    async fn initialize(&self) -> Result<InitStatus, DbError>;

    /// All users, in unspecified order
    async fn list_users(&self) -> Result<Vec<User>, DbError>;
}

/// MySQL-backed store. Nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    connector: Connector,
}

impl MySqlStore {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    pub fn from_config(config: DbConfig) -> Self {
        Self::new(Connector::new(config))
    }
}

#[async_trait]
impl UserStore for MySqlStore {
    async fn initialize(&self) -> Result<InitStatus, DbError> {
        self.connector
            .with_connection(|conn| Box::pin(schema::initialize(conn)))
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        self.connector
            .with_connection(|conn| Box::pin(async move { UserRepo::new(conn).list().await }))
            .await
    }
}

/// In-memory store for testing
///
/// Starts as an existing, empty table. Mirrors the MySQL seed behavior:
/// every `initialize` appends another seed row with the next id.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn initialize(&self) -> Result<InitStatus, DbError> {
        let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        let next_id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        rows.push(User {
            id: next_id,
            name: SEED_USER_NAME.to_string(),
        });

        Ok(InitStatus {
            table_ensured: true,
            seed_attempted: true,
        })
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        Ok(self
            .rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
