//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DB_PATH, DEFAULT_LOCALE, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    MAX_CONNECTIONS_LIMIT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line by the binary; every network and database
/// option can also be set through the `GEOIP_*` environment variables.
/// Library users can build it directly.
///
/// # Examples
///
/// ```no_run
/// use geoip_resolver::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/var/lib/geoip/geoip.db"),
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geoip_resolver",
    about = "Resolves IP addresses to location and ASN metadata from a SQLite range database."
)]
pub struct Config {
    /// GeoIP database path (SQLite file, opened read-only)
    #[arg(long, env = "GEOIP_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// HTTP listen port
    #[arg(long, env = "GEOIP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// HTTP listen address
    #[arg(long, env = "GEOIP_BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// Locale used when a request has no `locale` parameter
    #[arg(long, env = "GEOIP_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Maximum pooled database connections
    #[arg(long, env = "GEOIP_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Resolve a single address, print the JSON response and exit
    #[arg(long, value_name = "IP")]
    pub lookup: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            lookup: None,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "db_path",
                "must not be empty; set --db-path or GEOIP_DB_PATH",
            ));
        }
        if self.lookup.is_none() && self.port == 0 {
            return Err(ConfigValidationError::new(
                "port",
                "must be greater than 0 (e.g. --port 5022)",
            ));
        }
        if self.bind_address.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "bind_address",
                "must not be empty (e.g. --bind-address 0.0.0.0)",
            ));
        }
        if self.max_connections == 0 || self.max_connections > MAX_CONNECTIONS_LIMIT {
            return Err(ConfigValidationError::new(
                "max_connections",
                format!("must be between 1 and {MAX_CONNECTIONS_LIMIT}"),
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "locale",
                "must not be empty (e.g. --locale en)",
            ));
        }
        Ok(())
    }

    /// `host:port` string the server binds to.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
