//! Configuration record resolved from the environment.
//!
//! Two sources exist: the managed platform (Railway) and local development.
//! Every field has a default, so loading never fails.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::constants::*;
use super::env::{first_non_empty, first_non_empty_opt, first_parsed, is_managed_platform, EnvSource};

/// Where the configuration was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    ManagedPlatform,
    Local,
}

impl ConfigSource {
    /// Select the source from the platform markers.
    pub fn detect(env: &impl EnvSource) -> Self {
        if is_managed_platform(env) {
            ConfigSource::ManagedPlatform
        } else {
            ConfigSource::Local
        }
    }

    /// Short label, as shown in the debug panel.
    pub fn label(self) -> &'static str {
        match self {
            ConfigSource::ManagedPlatform => SOURCE_LABEL_PLATFORM,
            ConfigSource::Local => SOURCE_LABEL_LOCAL,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DatabaseDriver {
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "pgsql")]
    Postgres,
}

impl DatabaseDriver {
    /// Parse a driver identifier. Unknown values resolve to MySQL.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pgsql" | "postgres" | "postgresql" => DatabaseDriver::Postgres,
            _ => DatabaseDriver::MySql,
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            DatabaseDriver::MySql => DEFAULT_MYSQL_PORT,
            DatabaseDriver::Postgres => DEFAULT_POSTGRES_PORT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatabaseDriver::MySql => "mysql",
            DatabaseDriver::Postgres => "pgsql",
        }
    }
}

/// Database connection parameters.
#[derive(Clone, Serialize)]
pub struct DatabaseConfig {
    pub driver: DatabaseDriver,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub charset: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("charset", &self.charset)
            .finish()
    }
}

/// Outgoing mail settings.
#[derive(Clone, Serialize)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    #[serde(skip_serializing)]
    pub smtp_password: String,
    pub encryption: String,
    pub from_name: String,
    pub from_address: String,
    pub admin_address: String,
    pub enabled: bool,
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("encryption", &self.encryption)
            .field("from_name", &self.from_name)
            .field("from_address", &self.from_address)
            .field("admin_address", &self.admin_address)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// File upload settings.
#[derive(Debug, Clone, Serialize)]
pub struct UploadConfig {
    /// Shorthand size such as `10M`
    pub max_file_size: String,
    pub upload_path: PathBuf,
    pub allowed_extensions: Vec<String>,
}

impl UploadConfig {
    /// Whether `extension` (with or without a leading dot) may be uploaded.
    pub fn allows_extension(&self, extension: &str) -> bool {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.allowed_extensions.iter().any(|allowed| *allowed == ext)
    }
}

/// Runtime settings of the application process.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub environment: String,
    /// Seconds
    pub max_execution_time: u64,
    /// Kept as text; only the exact value `"true"` enables the headers.
    pub secure_headers: String,
    pub port: u16,
    pub project_id: String,
    pub environment_id: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment == ENV_PRODUCTION
    }

    /// The flag is compared as text: only `"true"` enables the headers.
    pub fn secure_headers_enabled(&self) -> bool {
        self.secure_headers == "true"
    }
}

/// All settings resolved for one process run.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationRecord {
    pub source: ConfigSource,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub upload: UploadConfig,
    pub app: AppConfig,
}

impl ConfigurationRecord {
    /// Detect the deployment environment and load the matching record.
    pub fn load(env: &impl EnvSource) -> Self {
        Self::from_source(ConfigSource::detect(env), env)
    }

    /// Load the record for an explicit source.
    pub fn from_source(source: ConfigSource, env: &impl EnvSource) -> Self {
        let record = match source {
            ConfigSource::ManagedPlatform => Self::platform(env),
            ConfigSource::Local => Self::local(env),
        };

        tracing::debug!(
            source = %record.source,
            environment = %record.app.environment,
            driver = record.database.driver.as_str(),
            "Configuration resolved"
        );

        record
    }

    fn platform(env: &impl EnvSource) -> Self {
        let driver = load_driver(env);

        Self {
            source: ConfigSource::ManagedPlatform,
            database: DatabaseConfig {
                driver,
                host: first_non_empty(env, &["DB_HOST", "MYSQLHOST", "PGHOST"], PLATFORM_DB_HOST),
                port: first_parsed(env, &["DB_PORT", "MYSQLPORT", "PGPORT"], driver.default_port()),
                name: first_non_empty(
                    env,
                    &["DB_NAME", "DB_DATABASE", "MYSQLDATABASE", "PGDATABASE"],
                    PLATFORM_DB_NAME,
                ),
                username: first_non_empty(
                    env,
                    &["DB_USER", "DB_USERNAME", "MYSQLUSER", "PGUSER"],
                    DEFAULT_DB_USER,
                ),
                password: first_non_empty(
                    env,
                    &["DB_PASSWORD", "DB_PASS", "MYSQLPASSWORD", "PGPASSWORD"],
                    "",
                ),
                charset: first_non_empty(env, &["DB_CHARSET"], DEFAULT_DB_CHARSET),
            },
            email: load_email(env),
            upload: UploadConfig {
                max_file_size: load_max_file_size(env),
                upload_path: PathBuf::from(first_non_empty(
                    env,
                    &["UPLOAD_PATH", "RAILWAY_VOLUME_MOUNT_PATH"],
                    PLATFORM_UPLOAD_PATH,
                )),
                allowed_extensions: load_allowed_extensions(env),
            },
            app: AppConfig {
                environment: first_non_empty(env, &["APP_ENV"], PLATFORM_APP_ENV),
                max_execution_time: load_max_execution_time(env),
                secure_headers: first_non_empty(env, &["SECURE_HEADERS"], PLATFORM_SECURE_HEADERS),
                port: first_parsed(env, &["PORT"], PLATFORM_APP_PORT),
                project_id: first_non_empty(env, &["RAILWAY_PROJECT_ID"], ""),
                environment_id: first_non_empty(
                    env,
                    &["RAILWAY_ENVIRONMENT_ID", "RAILWAY_ENVIRONMENT"],
                    "",
                ),
            },
        }
    }

    fn local(env: &impl EnvSource) -> Self {
        let driver = load_driver(env);

        Self {
            source: ConfigSource::Local,
            database: DatabaseConfig {
                driver,
                host: first_non_empty(env, &["DB_HOST"], LOCAL_DB_HOST),
                port: first_parsed(env, &["DB_PORT"], driver.default_port()),
                name: first_non_empty(env, &["DB_NAME", "DB_DATABASE"], LOCAL_DB_NAME),
                username: first_non_empty(env, &["DB_USER", "DB_USERNAME"], DEFAULT_DB_USER),
                password: first_non_empty(env, &["DB_PASSWORD", "DB_PASS"], ""),
                charset: first_non_empty(env, &["DB_CHARSET"], DEFAULT_DB_CHARSET),
            },
            email: load_email(env),
            upload: UploadConfig {
                max_file_size: load_max_file_size(env),
                upload_path: PathBuf::from(first_non_empty(env, &["UPLOAD_PATH"], LOCAL_UPLOAD_PATH)),
                allowed_extensions: load_allowed_extensions(env),
            },
            app: AppConfig {
                environment: first_non_empty(env, &["APP_ENV"], LOCAL_APP_ENV),
                max_execution_time: load_max_execution_time(env),
                secure_headers: first_non_empty(env, &["SECURE_HEADERS"], LOCAL_SECURE_HEADERS),
                port: first_parsed(env, &["PORT", "APP_PORT"], LOCAL_APP_PORT),
                project_id: String::new(),
                environment_id: String::new(),
            },
        }
    }
}

fn load_driver(env: &impl EnvSource) -> DatabaseDriver {
    DatabaseDriver::parse(&first_non_empty(
        env,
        &["DB_DRIVER", "DB_CONNECTION"],
        DEFAULT_DB_DRIVER,
    ))
}

fn load_email(env: &impl EnvSource) -> EmailConfig {
    let smtp_username = first_non_empty(env, &["SMTP_USER", "SMTP_USERNAME", "MAIL_USERNAME"], "");
    let smtp_password = first_non_empty(env, &["SMTP_PASS", "SMTP_PASSWORD", "MAIL_PASSWORD"], "");

    let from_address = first_non_empty_opt(env, &["MAIL_FROM_ADDRESS"]).unwrap_or_else(|| {
        if smtp_username.is_empty() {
            DEFAULT_MAIL_FROM_ADDRESS.to_string()
        } else {
            smtp_username.clone()
        }
    });

    let enabled = match first_non_empty_opt(env, &["EMAIL_ENABLED"]) {
        Some(flag) => flag == "true",
        None => !smtp_username.is_empty() && !smtp_password.is_empty(),
    };

    EmailConfig {
        smtp_host: first_non_empty(env, &["SMTP_HOST", "MAIL_HOST"], DEFAULT_SMTP_HOST),
        smtp_port: first_parsed(env, &["SMTP_PORT", "MAIL_PORT"], DEFAULT_SMTP_PORT),
        encryption: first_non_empty(
            env,
            &["SMTP_ENCRYPTION", "MAIL_ENCRYPTION"],
            DEFAULT_SMTP_ENCRYPTION,
        ),
        from_name: first_non_empty(env, &["MAIL_FROM_NAME"], DEFAULT_MAIL_FROM_NAME),
        admin_address: first_non_empty(env, &["ADMIN_EMAIL"], DEFAULT_ADMIN_EMAIL),
        from_address,
        enabled,
        smtp_username,
        smtp_password,
    }
}

fn load_max_file_size(env: &impl EnvSource) -> String {
    first_non_empty(
        env,
        &["UPLOAD_MAX_SIZE", "UPLOAD_MAX_FILESIZE"],
        DEFAULT_UPLOAD_MAX_SIZE,
    )
}

fn load_max_execution_time(env: &impl EnvSource) -> u64 {
    first_parsed(env, &["MAX_EXECUTION_TIME"], DEFAULT_MAX_EXECUTION_TIME)
}

fn load_allowed_extensions(env: &impl EnvSource) -> Vec<String> {
    let parsed: Vec<String> = first_non_empty_opt(env, &["UPLOAD_ALLOWED_EXTENSIONS"])
        .map(|list| {
            list.split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if parsed.is_empty() {
        DEFAULT_ALLOWED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
    } else {
        parsed
    }
}
