//! Travel Booking - environment-aware application bootstrap
//!
//! Detects whether the process runs on the managed platform or on a
//! developer machine, resolves the matching configuration, opens the
//! database connection and serves the HTTP surface.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Environment detection, configuration record, settings
//! - **bootstrap**: Start-up sequence
//! - **infra**: Database connection and upload directories
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Show the resolved configuration
//! cargo run -- config
//!
//! # Create upload directories
//! cargo run -- init-dirs
//! ```

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{ConfigurationRecord, Settings};
pub use errors::{AppError, AppResult, BootstrapError};
pub use infra::Database;
