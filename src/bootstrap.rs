//! Start-up sequence: connect, project settings, prepare upload directories.

use crate::api::AppState;
use crate::config::ConfigurationRecord;
use crate::errors::BootstrapError;
use crate::infra::{ensure_upload_dirs, Connector, Database};

/// Bring the application up for an already resolved `record`.
///
/// Upload directories are best-effort: failures are logged and start-up
/// continues. A database failure is returned unchanged so the entry point
/// can apply the production fail-fast policy.
pub async fn bootstrap(
    record: ConfigurationRecord,
    connector: &dyn Connector,
) -> Result<AppState, BootstrapError> {
    tracing::info!(
        source = %record.source,
        environment = %record.app.environment,
        "Bootstrapping application"
    );

    let database = Database::bootstrap(&record, connector).await?;
    let state = AppState::from_record(record, database);

    let report = ensure_upload_dirs(&state.settings.upload_path);
    if !report.is_complete() {
        tracing::warn!(
            failed = report.failed.len(),
            path = %state.settings.upload_path.display(),
            "Some upload directories could not be created"
        );
    }

    Ok(state)
}
