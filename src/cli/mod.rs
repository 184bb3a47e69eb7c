//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Bootstrap and start the HTTP server
//! - `config` - Show the resolved configuration
//! - `init-dirs` - Create upload directories
//! - `check-db` - Verify database connectivity

pub mod args;

pub use args::{Cli, Commands, ServeArgs};
