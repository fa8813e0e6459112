//! Handlers for requests outside the lookup route.

use axum::response::Response;

use super::error_response;
use crate::error_handling::FailureKind;

/// Any path other than `/lookup`.
pub async fn route_not_found() -> Response {
    error_response(FailureKind::RouteNotFound)
}

/// Any method other than GET (or HEAD) on `/lookup`.
pub async fn method_not_allowed() -> Response {
    error_response(FailureKind::MethodNotAllowed)
}
