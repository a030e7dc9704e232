//! userbase-server: HTTP service over a single MySQL `users` table
//!
//! Three routes: a static health message, schema bootstrap with a seed row,
//! and a listing of every user. Each database-backed request opens its own
//! connection through a bounded fixed-interval retry loop.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DbConfig;
pub use db::{Connector, DbError, MemoryStore, MySqlStore, RetryPolicy, UserStore};
pub use http::{run_server, ApiError, ServerConfig};
pub use models::{InitStatus, User};
