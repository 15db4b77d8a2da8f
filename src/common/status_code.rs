use axum::http::StatusCode as HttpStatusCode;
use strum_macros::{Display, EnumString};

/// HTTP status codes the service reports in error bodies
///
/// The variant name doubles as the machine-readable `code` of an
/// [`ApiError`](super::ApiError), rendered through `strum`'s `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum StatusCode {
    NotFound,
    InternalServerError,
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::NotFound => HttpStatusCode::NOT_FOUND,
            StatusCode::InternalServerError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
