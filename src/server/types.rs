//! Lookup server data structures.

use std::sync::Arc;

use serde::Deserialize;

use crate::geoip::Resolver;
use crate::storage::SqliteStore;

/// Shared state for the lookup server.
///
/// Holds no per-request data: the store hands out pooled connections and the
/// resolver is immutable.
#[derive(Clone)]
pub struct AppState<S = SqliteStore> {
    pub store: S,
    pub resolver: Arc<Resolver>,
    pub default_locale: Arc<str>,
}

impl<S> AppState<S> {
    pub fn new(store: S, message: &str, default_locale: &str) -> Self {
        Self {
            store,
            resolver: Arc::new(Resolver::new(message)),
            default_locale: Arc::from(default_locale),
        }
    }
}

/// Query string of `GET /lookup`.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub ip: Option<String>,
    pub locale: Option<String>,
}
