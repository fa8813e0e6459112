//! Lookup server HTTP handlers.

mod fallback;
mod lookup;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::error_handling::FailureKind;
use crate::geoip::ErrorResponse;

pub use fallback::{method_not_allowed, route_not_found};
pub use lookup::lookup_handler;

/// Serializes `body` as JSON with the given status code.
pub(crate) fn json_response<T: Serialize>(status: u16, body: &T) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

/// `{"status": .., "detail": ..}` body for a failure kind.
pub(crate) fn error_response(kind: FailureKind) -> Response {
    let body = ErrorResponse::from(kind);
    json_response(body.status, &body)
}
