//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_SERVER_HOST;

/// Travel Booking - environment-aware application bootstrap
#[derive(Parser, Debug)]
#[command(name = "travel-booking")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap and start the HTTP server
    Serve(ServeArgs),

    /// Print the resolved configuration (secrets redacted)
    Config,

    /// Create missing upload directories
    InitDirs,

    /// Open the database connection and ping it
    CheckDb,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on (defaults to the configured application port)
    #[arg(short, long)]
    pub port: Option<u16>,
}
