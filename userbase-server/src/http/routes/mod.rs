//! Route handlers organized by resource

pub mod init;
pub mod root;
pub mod users;
