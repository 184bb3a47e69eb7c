//! Config command - Prints the resolved configuration.

use crate::config::ConfigurationRecord;
use crate::errors::{AppError, AppResult};

/// Execute the config command
pub async fn execute(record: ConfigurationRecord) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| AppError::internal(format!("Failed to serialize configuration: {}", e)))?;
    println!("{}", json);
    Ok(())
}
