//! Database layer - connection bootstrap, schema and repositories
//!
//! # Design Principles
//!
//! - One connection per operation, no pool
//! - Fixed-interval bounded retry on connect only, never per statement
//! - Connections are closed explicitly on every exit path
//! - Handlers depend on [`UserStore`], not on MySQL directly

pub mod connector;
pub mod error;
pub mod repos;
pub mod retry;
pub mod schema;
pub mod store;

pub use connector::Connector;
pub use error::DbError;
pub use repos::UserRepo;
pub use retry::{retry_fixed, Exhausted, RetryPolicy};
pub use store::{MemoryStore, MySqlStore, UserStore};
