//! Command implementations for userbase CLI

pub mod init;
pub mod serve;
pub mod users;

pub use init::run_init;
pub use serve::run_serve;
pub use users::run_users;
