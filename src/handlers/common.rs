use crate::errors::{ApiError, ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Turns an empty lookup into a 404 at the HTTP boundary
pub fn found_or_404<T>(value: Option<T>, what: impl FnOnce() -> String) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::NotFound(what()))
}
