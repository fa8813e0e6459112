//! Error type definitions.
//!
//! This module defines the error types used throughout the application, from
//! startup (logger, database) through per-request resolution failures.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist. The service never creates an empty database.
    #[error("Database file not found: {0}")]
    FileNotFound(String),

    /// SQL execution or connection error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Failure kinds surfaced by a single resolution.
///
/// "Not found" is deliberately absent: a valid address with no covering range
/// is a normal outcome, reported through
/// [`Resolution::NotFound`](crate::geoip::Resolution::NotFound).
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The input is neither IPv4 nor IPv6, or its IPv6 key does not fit in
    /// a signed 64-bit integer.
    #[error("Invalid IP address: {0:?}")]
    ParseFailure(String),

    /// The storage handle could not be read.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] DatabaseError),
}

impl ResolveError {
    /// Failure kind the error body is built from. Storage errors are not
    /// echoed to clients; only the kind's detail text is.
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::ParseFailure(_) => FailureKind::ParseFailure,
            ResolveError::StorageUnavailable(_) => FailureKind::StorageUnavailable,
        }
    }
}

/// Request failure categories reported by the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    MalformedRequest,
    MissingIp,
    ParseFailure,
    NotFound,
    StorageUnavailable,
    RouteNotFound,
    MethodNotAllowed,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    /// HTTP status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            FailureKind::MalformedRequest | FailureKind::MissingIp | FailureKind::ParseFailure => {
                400
            }
            FailureKind::NotFound | FailureKind::RouteNotFound => 404,
            FailureKind::MethodNotAllowed => 405,
            FailureKind::StorageUnavailable => 500,
        }
    }

    /// Client-facing detail text placed in the error body.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MalformedRequest => "Invalid request",
            FailureKind::MissingIp => "Missing ip parameter",
            FailureKind::ParseFailure => "Invalid IP address",
            FailureKind::NotFound => "IP not found in ranges",
            FailureKind::StorageUnavailable => "Database query failed",
            FailureKind::RouteNotFound => "Route not found",
            FailureKind::MethodNotAllowed => "Method not allowed",
        }
    }
}
