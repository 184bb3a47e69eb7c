//! Serve command - Bootstraps the application and starts the HTTP server.

use crate::api::create_router;
use crate::bootstrap::bootstrap;
use crate::cli::args::ServeArgs;
use crate::config::ConfigurationRecord;
use crate::errors::{AppError, AppResult};
use crate::infra::SeaOrmConnector;

/// Execute the serve command
pub async fn execute(args: ServeArgs, record: ConfigurationRecord) -> AppResult<()> {
    tracing::info!("Starting server...");

    let port = args.port.unwrap_or(record.app.port);
    let state = bootstrap(record, &SeaOrmConnector).await?;

    if state.settings.secure_headers {
        tracing::info!("Security headers enabled");
    }

    let app = create_router(state);

    let addr = format!("{}:{}", args.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
