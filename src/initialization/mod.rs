//! Application initialization and resource setup.
//!
//! This module provides the functions that prepare shared resources before
//! the service starts:
//! - Logger
//! - Read-only database pool, with a schema check
//!
//! All initialization functions return proper error types for error handling.

mod logger;

use log::warn;

use crate::config::Config;
use crate::error_handling::DatabaseError;
use crate::storage::{init_db_pool_with_path, missing_tables, DbPool};

// Re-export public API
pub use logger::init_logger_with;

/// Opens the configured database and warns about missing tables.
///
/// Missing tables are not fatal at startup: lookups touching them fail with
/// a storage error, which the service reports per request.
///
/// # Errors
///
/// Returns `DatabaseError` if the file is missing or cannot be opened.
pub async fn init_database(config: &Config) -> Result<DbPool, DatabaseError> {
    let pool = init_db_pool_with_path(&config.db_path, config.max_connections).await?;
    let missing = missing_tables(pool.as_ref()).await?;
    if !missing.is_empty() {
        warn!(
            "Database {} is missing tables: {}",
            config.db_path.display(),
            missing.join(", ")
        );
    }
    Ok(pool)
}
