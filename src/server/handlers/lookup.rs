//! `GET /lookup` handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use log::{debug, warn};

use super::super::types::{AppState, LookupParams};
use super::{error_response, json_response};
use crate::error_handling::{FailureKind, ResolveError};
use crate::geoip::{LookupBody, LookupRequest};
use crate::storage::RangeStore;

/// Resolves `ip` (and optional `locale`) from the query string.
pub async fn lookup_handler<S>(
    State(state): State<AppState<S>>,
    query: Result<Query<LookupParams>, QueryRejection>,
) -> Response
where
    S: RangeStore + Clone + Send + Sync + 'static,
{
    let Ok(Query(params)) = query else {
        return error_response(FailureKind::MalformedRequest);
    };
    let ip = match params.ip {
        Some(ip) if !ip.is_empty() => ip,
        _ => return error_response(FailureKind::MissingIp),
    };

    let request = LookupRequest::new(ip, params.locale.as_deref(), &state.default_locale);
    let result = state.resolver.resolve(&state.store, &request).await;

    if let Err(ResolveError::StorageUnavailable(ref e)) = result {
        warn!("Lookup for {} failed: {}", request.ip, e);
    }

    let body = LookupBody::from_result(result);
    debug!(
        "GET /lookup ip={} locale={} -> {}",
        request.ip,
        request.locale,
        body.status()
    );
    json_response(body.status(), &body)
}
