//! Database connection pool management.
//!
//! This module opens the GeoIP SQLite database as a read-only connection pool:
//! - The file must already exist (the service never creates an empty database)
//! - Connections are opened read-only; the resolver never writes
//! - Pool size bounds the number of lookups reading concurrently

use std::path::Path;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::error_handling::DatabaseError;

/// Shared handle to the connection pool.
pub type DbPool = Arc<Pool<Sqlite>>;

/// Opens a read-only connection pool on an existing database file.
///
/// # Errors
///
/// Returns `DatabaseError::FileNotFound` if `db_path` does not exist, or
/// `DatabaseError::SqlError` if SQLite cannot open it.
pub async fn init_db_pool_with_path(
    db_path: &Path,
    max_connections: u32,
) -> Result<DbPool, DatabaseError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    if !db_path.is_file() {
        error!("Database file not found: {db_path_str}");
        return Err(DatabaseError::FileNotFound(db_path_str));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to open database {db_path_str}: {e}");
            DatabaseError::SqlError(e)
        })?;

    info!("Opened GeoIP database {db_path_str} (read-only, {max_connections} connections)");
    Ok(Arc::new(pool))
}
