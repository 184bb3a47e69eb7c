//! Upload directory layout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{UPLOAD_DIR_MODE, UPLOAD_SUBDIRECTORIES};
use crate::errors::{AppError, AppResult};

/// Outcome of [`ensure_upload_dirs`].
#[derive(Debug, Default)]
pub struct UploadDirReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
}

impl UploadDirReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turn any failure into an error.
    pub fn into_result(self) -> AppResult<Self> {
        if self.failed.is_empty() {
            return Ok(self);
        }

        let details = self
            .failed
            .iter()
            .map(|(path, e)| format!("{}: {}", path.display(), e))
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::internal(format!(
            "Failed to create upload directories: {}",
            details
        )))
    }
}

/// Paths of the upload subdirectories under `base`.
pub fn upload_dirs(base: &Path) -> Vec<PathBuf> {
    UPLOAD_SUBDIRECTORIES.iter().map(|dir| base.join(dir)).collect()
}

/// Create every missing upload subdirectory under `base`.
///
/// Best-effort: a failing directory is logged and recorded in the report,
/// and the remaining ones are still attempted.
pub fn ensure_upload_dirs(base: &Path) -> UploadDirReport {
    let mut report = UploadDirReport::default();

    for dir in upload_dirs(base) {
        if dir.is_dir() {
            report.existing.push(dir);
            continue;
        }

        match create_dir(&dir) {
            Ok(()) => {
                tracing::info!(path = %dir.display(), "Created upload directory");
                report.created.push(dir);
            }
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Failed to create upload directory");
                report.failed.push((dir, e));
            }
        }
    }

    report
}

#[cfg(unix)]
fn create_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(UPLOAD_DIR_MODE)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
