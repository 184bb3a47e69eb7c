//! Infrastructure layer - External systems integration
//!
//! - Database connection bootstrap
//! - Upload directory layout on the filesystem

pub mod db;
pub mod uploads;

pub use db::{connect_options, connection_url, timezone_statement, Connector, Database, SeaOrmConnector};
pub use uploads::{ensure_upload_dirs, upload_dirs, UploadDirReport};

#[cfg(any(test, feature = "test-utils"))]
pub use db::MockConnector;
