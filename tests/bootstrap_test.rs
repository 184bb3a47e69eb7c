//! Start-up sequence tests.
//!
//! A scripted connector stands in for the database driver so both the
//! success and failure paths run without a server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult,
    RuntimeErr,
};

use travel_booking::bootstrap::bootstrap;
use travel_booking::config::ConfigurationRecord;
use travel_booking::errors::{AppError, BootstrapError};
use travel_booking::infra::{connection_url, ensure_upload_dirs, upload_dirs, Connector};

/// Connector that counts attempts and either refuses or hands out a mock connection.
struct ScriptedConnector {
    refuse_with: Option<String>,
    attempts: AtomicUsize,
    seen_urls: std::sync::Mutex<Vec<String>>,
}

impl ScriptedConnector {
    fn accepting() -> Self {
        Self {
            refuse_with: None,
            attempts: AtomicUsize::new(0),
            seen_urls: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn refusing(message: &str) -> Self {
        Self {
            refuse_with: Some(message.to_string()),
            ..Self::accepting()
        }
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn open(&self, options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.seen_urls
            .lock()
            .unwrap()
            .push(options.get_url().to_string());

        match &self.refuse_with {
            Some(message) => Err(DbErr::Conn(RuntimeErr::Internal(message.clone()))),
            None => Ok(MockDatabase::new(DatabaseBackend::MySql)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                }])
                .into_connection()),
        }
    }
}

fn record(pairs: &[(&str, &str)]) -> ConfigurationRecord {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ConfigurationRecord::load(&env)
}

// =============================================================================
// Connection Policy
// =============================================================================

#[tokio::test]
async fn test_production_failure_is_fatal_without_retry() {
    let connector = ScriptedConnector::refusing("Access denied for user 'root'@'10.0.0.1'");
    let record = record(&[("RAILWAY_PROJECT_ID", "p1")]);
    assert!(record.app.is_production());

    let err = bootstrap(record, &connector).await.err().unwrap();

    assert!(err.is_fatal());
    assert!(!err.to_string().contains("Access denied"));
    assert_eq!(connector.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_non_production_failure_is_catchable_with_message() {
    let connector = ScriptedConnector::refusing("Access denied for user 'root'@'localhost'");
    let err = bootstrap(record(&[]), &connector).await.err().unwrap();

    match &err {
        BootstrapError::Connection { message } => {
            assert!(message.contains("Access denied for user 'root'@'localhost'"));
        }
        other => panic!("expected connection error, got {:?}", other),
    }
    assert_eq!(connector.attempts.load(Ordering::SeqCst), 1);

    let app_err = AppError::from(err);
    assert_eq!(app_err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_connector_receives_configured_url() {
    let tmp = tempfile::tempdir().unwrap();
    let upload_path = tmp.path().join("uploads");
    let record = record(&[
        ("DB_HOST", "db.example"),
        ("DB_NAME", "trips"),
        ("UPLOAD_PATH", upload_path.to_str().unwrap()),
    ]);
    let expected = connection_url(&record.database);
    let connector = ScriptedConnector::accepting();

    bootstrap(record, &connector).await.unwrap();

    assert_eq!(*connector.seen_urls.lock().unwrap(), vec![expected]);
}

// =============================================================================
// Full Start-up
// =============================================================================

#[tokio::test]
async fn test_bootstrap_creates_upload_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let upload_path = tmp.path().join("uploads");
    let record = record(&[
        ("UPLOAD_PATH", upload_path.to_str().unwrap()),
        ("SMTP_HOST", "mail.example"),
    ]);

    let state = bootstrap(record, &ScriptedConnector::accepting())
        .await
        .unwrap();

    assert_eq!(state.settings.upload_path, upload_path);
    assert_eq!(state.settings.smtp_host, "mail.example");
    for dir in upload_dirs(&upload_path) {
        assert!(dir.is_dir(), "{} missing", dir.display());
    }
}

#[tokio::test]
async fn test_unwritable_upload_path_does_not_stop_bootstrap() {
    let tmp = tempfile::tempdir().unwrap();
    let blocked = tmp.path().join("blocked");
    std::fs::write(&blocked, b"not a directory").unwrap();

    let record = record(&[("UPLOAD_PATH", blocked.to_str().unwrap())]);
    assert!(bootstrap(record, &ScriptedConnector::accepting()).await.is_ok());
}

// =============================================================================
// Upload Directories
// =============================================================================

#[test]
fn test_ensure_upload_dirs_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();

    let first = ensure_upload_dirs(tmp.path());
    let second = ensure_upload_dirs(tmp.path());

    assert!(first.is_complete());
    assert!(second.is_complete());
    assert_eq!(first.created.len(), 4);
    assert!(second.created.is_empty());
    assert_eq!(second.existing.len(), 4);

    let mut names: Vec<String> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["cancellations", "documents", "payments", "photos"]);
}
