//! geoip_resolver library: IP address to location and ASN resolution
//!
//! This library resolves IPv4 and IPv6 addresses against a SQLite database of
//! network ranges (city blocks, country blocks, ASN blocks and per-locale
//! location text) and renders the answer as a stable JSON document.
//!
//! # Example
//!
//! ```no_run
//! use geoip_resolver::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     db_path: std::path::PathBuf::from("geoip.db"),
//!     ..Default::default()
//! };
//!
//! let (status, body) = run_lookup(&config, "8.8.8.8").await?;
//! println!("{} {}", status, body);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod address;
pub mod config;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use geoip::{LookupBody, LookupRequest, Resolution, Resolver};
pub use run::{run_lookup, run_server};
pub use storage::{MemoryStore, RangeStore, SqliteStore};

// Internal run module (wires configuration, storage and the server together)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, ATTRIBUTION_MESSAGE};
    use crate::geoip::{LookupBody, LookupRequest, Resolver};
    use crate::initialization::init_database;
    use crate::server::{start_server, AppState};
    use crate::storage::SqliteStore;

    /// Opens the database and serves the lookup API until Ctrl-C.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The database file is missing or cannot be opened
    /// - The listen address cannot be bound
    pub async fn run_server(config: Config) -> Result<()> {
        let pool = init_database(&config)
            .await
            .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;
        info!(
            "Serving lookups from {} (default locale: {})",
            config.db_path.display(),
            config.locale
        );

        let state = AppState::new(SqliteStore::new(pool), ATTRIBUTION_MESSAGE, &config.locale);
        start_server(&config.listen_address(), state).await
    }

    /// Resolves one address without starting the server.
    ///
    /// Returns the HTTP status the server would have answered with and the
    /// pretty-printed JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened. Lookup failures are
    /// not errors: they are reported through the returned status and body.
    pub async fn run_lookup(config: &Config, ip: &str) -> Result<(u16, String)> {
        let pool = init_database(config)
            .await
            .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;
        let store = SqliteStore::new(pool);
        let resolver = Resolver::new(ATTRIBUTION_MESSAGE);

        let request = LookupRequest::new(ip, None, &config.locale);
        let body = LookupBody::from_result(resolver.resolve(&store, &request).await);
        let json = serde_json::to_string_pretty(&body).context("Failed to serialize lookup")?;

        store.pool().close().await;
        Ok((body.status(), json))
    }
}
