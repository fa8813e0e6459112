//! Range database access.
//!
//! This module provides:
//! - The [`RangeStore`] read interface the resolver is written against
//! - A SQLite implementation over a read-only connection pool
//! - An in-memory implementation with identical selection rules
//! - The table schema, for building and checking databases

mod memory;
mod pool;
mod schema;
mod sqlite;
mod store;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export public API
pub use memory::MemoryStore;
pub use pool::{init_db_pool_with_path, DbPool};
pub use schema::{create_schema, missing_tables, REQUIRED_TABLES};
pub use sqlite::SqliteStore;
pub use store::RangeStore;
