//! Error handling.
//!
//! This module provides the error types for the whole crate:
//! - **Initialization** errors (logger setup)
//! - **Database** errors (missing file, SQL failures)
//! - **Resolution** errors (unparseable address, unreadable storage)
//! - **Failure kinds** used by the HTTP layer to pick a status code and detail text
//!
//! A valid address that matches no range is not an error; see
//! [`Resolution`](crate::geoip::Resolution).

mod types;

// Re-export public API
pub use types::{DatabaseError, FailureKind, InitializationError, ResolveError};
