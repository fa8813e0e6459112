//! Configuration constants.
//!
//! Defaults for the service configuration and the fixed attribution text
//! returned with every successful lookup.

/// Default SQLite database path.
pub const DEFAULT_DB_PATH: &str = "config/database/geoip.db";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5022;

/// Default listen address (all interfaces).
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Locale used when a request does not name one.
pub const DEFAULT_LOCALE: &str = "en";

/// Default number of pooled read-only connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Upper bound accepted for `--max-connections`.
pub const MAX_CONNECTIONS_LIMIT: u32 = 256;

/// Attribution text included as `message` in every 200 response.
pub const ATTRIBUTION_MESSAGE: &str = "If you are using this solution, please reference the main project at https://whattimeis.in. This helps us keep the project actively maintained with new blocks and updates.";

/// Path of the single lookup route.
pub const LOOKUP_ROUTE: &str = "/lookup";
