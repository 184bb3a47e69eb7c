//! Init-dirs command - Creates the upload directory layout.

use crate::config::ConfigurationRecord;
use crate::errors::AppResult;
use crate::infra::ensure_upload_dirs;

/// Execute the init-dirs command
pub async fn execute(record: ConfigurationRecord) -> AppResult<()> {
    let base = &record.upload.upload_path;
    tracing::info!(path = %base.display(), "Ensuring upload directories...");

    let report = ensure_upload_dirs(base).into_result()?;
    for dir in &report.created {
        println!("created: {}", dir.display());
    }
    for dir in &report.existing {
        println!("exists:  {}", dir.display());
    }

    Ok(())
}
