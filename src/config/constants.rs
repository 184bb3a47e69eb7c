//! Application-wide constants
//!
//! Centralized location for defaults and fixed values used while resolving
//! configuration.

// =============================================================================
// Platform Detection
// =============================================================================

/// Variables injected by the managed platform; any non-empty value selects
/// the managed-platform configuration source.
pub const PLATFORM_MARKERS: &[&str] = &[
    "RAILWAY_ENVIRONMENT",
    "RAILWAY_ENVIRONMENT_NAME",
    "RAILWAY_PROJECT_ID",
];

/// Label of the managed-platform configuration source
pub const SOURCE_LABEL_PLATFORM: &str = "railway";

/// Label of the local development configuration source
pub const SOURCE_LABEL_LOCAL: &str = "local";

// =============================================================================
// Database
// =============================================================================

/// Default driver identifier
pub const DEFAULT_DB_DRIVER: &str = "mysql";

/// Default MySQL port
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default PostgreSQL port
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Database host on the platform's private network
pub const PLATFORM_DB_HOST: &str = "mysql.railway.internal";

/// Database name provisioned by the platform
pub const PLATFORM_DB_NAME: &str = "railway";

/// Database host for local development
pub const LOCAL_DB_HOST: &str = "localhost";

/// Database name for local development
pub const LOCAL_DB_NAME: &str = "travel_booking";

/// Default database user
pub const DEFAULT_DB_USER: &str = "root";

/// Default connection character set
pub const DEFAULT_DB_CHARSET: &str = "utf8mb4";

/// Session timezone offset applied to every connection (UTC+7)
pub const DB_SESSION_TIMEZONE: &str = "+07:00";

/// Message shown when the database is unreachable in production
pub const FATAL_DB_MESSAGE: &str = "Service temporarily unavailable. Please try again later.";

// =============================================================================
// Email
// =============================================================================

/// Default SMTP relay
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP submission port
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default SMTP encryption mode
pub const DEFAULT_SMTP_ENCRYPTION: &str = "tls";

/// Default sender display name
pub const DEFAULT_MAIL_FROM_NAME: &str = "Travel Booking";

/// Sender address used when neither MAIL_FROM_ADDRESS nor an SMTP user is set
pub const DEFAULT_MAIL_FROM_ADDRESS: &str = "noreply@travel-booking.local";

/// Default administrator address for booking notifications
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@travel-booking.local";

// =============================================================================
// Uploads
// =============================================================================

/// Default maximum upload size (PHP-style shorthand)
pub const DEFAULT_UPLOAD_MAX_SIZE: &str = "10M";

/// Fallback for an unparsable upload size: 10 MiB
pub const DEFAULT_UPLOAD_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Upload base path on the platform volume
pub const PLATFORM_UPLOAD_PATH: &str = "/app/uploads";

/// Upload base path for local development, relative to the working directory
pub const LOCAL_UPLOAD_PATH: &str = "uploads";

/// File extensions accepted for uploads
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf", "doc", "docx"];

/// Subdirectories created under the upload base path
pub const UPLOAD_SUBDIRECTORIES: &[&str] = &["documents", "payments", "cancellations", "photos"];

/// Permission mode for created upload directories
pub const UPLOAD_DIR_MODE: u32 = 0o755;

// =============================================================================
// Application
// =============================================================================

/// Environment name that enables fail-fast behavior
pub const ENV_PRODUCTION: &str = "production";

/// Default environment on the managed platform
pub const PLATFORM_APP_ENV: &str = ENV_PRODUCTION;

/// Default environment for local development
pub const LOCAL_APP_ENV: &str = "development";

/// Default maximum execution time per request, in seconds
pub const DEFAULT_MAX_EXECUTION_TIME: u64 = 300;

/// Default secure-headers flag on the managed platform
pub const PLATFORM_SECURE_HEADERS: &str = "true";

/// Default secure-headers flag for local development
pub const LOCAL_SECURE_HEADERS: &str = "false";

/// Default listening port on the managed platform
pub const PLATFORM_APP_PORT: u16 = 8080;

/// Default listening port for local development
pub const LOCAL_APP_PORT: u16 = 8000;

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// IANA name of the application timezone
pub const APP_TIMEZONE: &str = "Asia/Jakarta";

/// Offset of the application timezone from UTC, in seconds (UTC+7, no DST)
pub const APP_TIMEZONE_OFFSET_SECONDS: i32 = 7 * 3600;

// =============================================================================
// Session
// =============================================================================

/// Session cookie name
pub const SESSION_COOKIE_NAME: &str = "TRAVELSESSID";
