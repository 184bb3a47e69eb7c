//! Travel Booking - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_booking::{
    cli::{Cli, Commands},
    commands,
    config::{ConfigurationRecord, ProcessEnv},
    errors::{AppError, BootstrapError},
};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let record = ConfigurationRecord::load(&ProcessEnv);
    tracing::debug!(source = %record.source, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, record).await,
        Commands::Config => commands::config::execute(record).await,
        Commands::InitDirs => commands::init_dirs::execute(record).await,
        Commands::CheckDb => commands::check_db::execute(record).await,
    };

    match result {
        Ok(()) => {}
        // Production database failure: generic message only, no detail
        Err(AppError::Bootstrap(BootstrapError::Fatal { public_message })) => {
            eprintln!("{}", public_message);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
