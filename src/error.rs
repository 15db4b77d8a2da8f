use thiserror::Error;

use crate::common::{ApiError, StatusCode};

pub type Result<T> = std::result::Result<T, OrderAppError>;

#[derive(Debug, Error)]
pub enum OrderAppError {
    #[error("Order {id} not found")]
    NotFound { id: i64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sea-orm-db")]
impl From<sea_orm::DbErr> for OrderAppError {
    fn from(err: sea_orm::DbErr) -> Self {
        OrderAppError::Storage(err.to_string())
    }
}

impl OrderAppError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrderAppError::NotFound { .. } => StatusCode::NotFound,
            OrderAppError::Storage(_) => StatusCode::InternalServerError,
            OrderAppError::Config(_) => StatusCode::InternalServerError,
            OrderAppError::Internal(_) => StatusCode::InternalServerError,
        }
    }
}

impl axum::response::IntoResponse for OrderAppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status == StatusCode::InternalServerError {
            tracing::error!(error = %self, "request failed");
        }
        ApiError::new(status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = OrderAppError::NotFound { id: 42 }.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let err = OrderAppError::Storage("connection refused".to_string());
        assert_eq!(err.status(), StatusCode::InternalServerError);
        assert_eq!(err.to_string(), "Storage error: connection refused");
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
