use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::common::StatusCode;

/// Standard error body
///
/// Successful responses carry the resource itself; only failures are wrapped.
///
/// # Example
/// ```
/// use order_app::common::{ApiError, StatusCode};
///
/// let body = ApiError::new(StatusCode::NotFound, "Order 7 not found");
/// assert_eq!(body.code, "NotFound");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub timestamp: String,

    #[serde(skip)]
    pub http_status: HttpStatusCode,
}

impl ApiError {
    /// Create an error body
    ///
    /// The `code` is derived from the `StatusCode` variant name.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            http_status: status.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.http_status, Json(self)).into_response()
    }
}
