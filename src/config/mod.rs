//! Application configuration module
//!
//! Detects the deployment environment, resolves the configuration record
//! and projects it into read-only settings.

mod constants;
mod env;
mod record;
mod settings;

pub use constants::*;
pub use env::{first_non_empty, first_non_empty_opt, first_parsed, is_managed_platform, EnvSource, ProcessEnv};
pub use record::{
    AppConfig, ConfigSource, ConfigurationRecord, DatabaseConfig, DatabaseDriver, EmailConfig,
    UploadConfig,
};
pub use settings::{app_timezone, parse_size, Settings};
