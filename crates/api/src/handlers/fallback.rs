//! Catch-all handlers for unmatched paths and methods.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Router-level fallback: no route matches the path.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Method-level fallback of every API route.
///
/// A bare `OPTIONS` gets an empty 204; any other unsupported method is a 405.
pub async fn method_not_allowed(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        AppError::MethodNotAllowed.into_response()
    }
}
