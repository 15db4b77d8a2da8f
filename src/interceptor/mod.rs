//! Request interception
//!
//! Middleware applied to every route of the service. Each function plugs into
//! the router through `axum::middleware::from_fn`.

mod logging;

pub use logging::{REQUEST_ID_HEADER, log_requests};
