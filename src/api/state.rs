//! Application state shared by handlers and middleware.

use std::sync::Arc;

use crate::config::{ConfigurationRecord, Settings};
use crate::infra::Database;

/// Everything resolved during bootstrap, shared read-only.
#[derive(Clone)]
pub struct AppState {
    /// Projected settings
    pub settings: Arc<Settings>,
    /// Full configuration record
    pub record: Arc<ConfigurationRecord>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Project the settings from `record` and bundle them with the connection.
    pub fn from_record(record: ConfigurationRecord, database: Database) -> Self {
        let settings = Settings::project(&record);

        Self {
            settings: Arc::new(settings),
            record: Arc::new(record),
            database: Arc::new(database),
        }
    }
}
