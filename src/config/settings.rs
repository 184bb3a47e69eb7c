//! Process-wide settings projected from the configuration record.
//!
//! Built once at start-up and shared behind an `Arc`; nothing mutates it
//! afterwards.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Offset, Utc};

use super::constants::{APP_TIMEZONE, APP_TIMEZONE_OFFSET_SECONDS, DEFAULT_UPLOAD_MAX_BYTES};
use super::record::ConfigurationRecord;

/// Read-only application settings
#[derive(Clone)]
pub struct Settings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    smtp_password: String,
    pub smtp_encryption: String,
    pub mail_from_name: String,
    pub mail_from_address: String,
    pub admin_email: String,
    pub email_enabled: bool,
    pub max_upload_bytes: u64,
    /// `None` when the configured limit is 0 (unlimited)
    pub max_execution_time: Option<Duration>,
    pub upload_path: PathBuf,
    pub secure_headers: bool,
    pub timezone: FixedOffset,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_password", &"[REDACTED]")
            .field("smtp_encryption", &self.smtp_encryption)
            .field("mail_from_name", &self.mail_from_name)
            .field("mail_from_address", &self.mail_from_address)
            .field("admin_email", &self.admin_email)
            .field("email_enabled", &self.email_enabled)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("max_execution_time", &self.max_execution_time)
            .field("upload_path", &self.upload_path)
            .field("secure_headers", &self.secure_headers)
            .field("timezone", &APP_TIMEZONE)
            .finish()
    }
}

impl Settings {
    /// Flatten the email, upload and app groups of `record`.
    pub fn project(record: &ConfigurationRecord) -> Self {
        let max_upload_bytes = parse_size(&record.upload.max_file_size).unwrap_or_else(|| {
            tracing::warn!(
                value = %record.upload.max_file_size,
                "Invalid upload size, using default"
            );
            DEFAULT_UPLOAD_MAX_BYTES
        });

        Self {
            smtp_host: record.email.smtp_host.clone(),
            smtp_port: record.email.smtp_port,
            smtp_user: record.email.smtp_username.clone(),
            smtp_password: record.email.smtp_password.clone(),
            smtp_encryption: record.email.encryption.clone(),
            mail_from_name: record.email.from_name.clone(),
            mail_from_address: record.email.from_address.clone(),
            admin_email: record.email.admin_address.clone(),
            email_enabled: record.email.enabled,
            max_upload_bytes,
            max_execution_time: (record.app.max_execution_time > 0)
                .then(|| Duration::from_secs(record.app.max_execution_time)),
            upload_path: record.upload.upload_path.clone(),
            secure_headers: record.app.secure_headers_enabled(),
            timezone: app_timezone(),
        }
    }

    /// Get the SMTP password for the mail transport.
    pub fn smtp_password(&self) -> &str {
        &self.smtp_password
    }

    /// Body limit for request extractors.
    pub fn body_limit(&self) -> usize {
        usize::try_from(self.max_upload_bytes).unwrap_or(usize::MAX)
    }

    /// Current time in the application timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.timezone)
    }
}

/// Asia/Jakarta, which observes no DST.
pub fn app_timezone() -> FixedOffset {
    FixedOffset::east_opt(APP_TIMEZONE_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Parse a PHP-style size such as `512K`, `10M` or `1G` into bytes.
pub fn parse_size(value: &str) -> Option<u64> {
    let value = value.trim();
    let last = value.chars().last()?;

    let (digits, multiplier) = match last.to_ascii_uppercase() {
        'K' => (&value[..value.len() - 1], 1024),
        'M' => (&value[..value.len() - 1], 1024 * 1024),
        'G' => (&value[..value.len() - 1], 1024 * 1024 * 1024),
        _ => (value, 1),
    };

    digits.trim().parse::<u64>().ok()?.checked_mul(multiplier)
}
