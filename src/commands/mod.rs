//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod check_db;
pub mod config;
pub mod init_dirs;
pub mod serve;
