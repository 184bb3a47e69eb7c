//! Check-db command - Verifies database connectivity.

use crate::config::ConfigurationRecord;
use crate::errors::AppResult;
use crate::infra::{Database, SeaOrmConnector};

/// Execute the check-db command
pub async fn execute(record: ConfigurationRecord) -> AppResult<()> {
    tracing::info!("Checking database connection...");

    let db = Database::bootstrap(&record, &SeaOrmConnector).await?;
    db.ping().await?;

    println!(
        "ok: {} at {}:{}/{}",
        db.driver().as_str(),
        record.database.host,
        record.database.port,
        record.database.name
    );
    Ok(())
}
