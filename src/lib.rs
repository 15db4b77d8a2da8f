//! # Order App
//!
//! A small REST service exposing CRUD over `Order` records.
//!
//! ## Routes
//!
//! - `GET /api/orders`: every stored order
//! - `GET /api/orders/{id}`: one order
//! - `POST /api/orders`: insert or update an order
//! - `GET /api/orders/hello`: fixed greeting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use order_app::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> order_app::Result<()> {
//!     let config = AppConfig::from_service(&ConfigService::from_env())?;
//!     let repository: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
//!
//!     Application::builder()
//!         .config(config)
//!         .repository(repository)
//!         .build()?
//!         .serve()
//!         .await
//! }
//! ```

pub mod common;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod repository;

pub use common::ApiError;
pub use domain::{Order, OrderId};
pub use error::{OrderAppError, Result};

pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use order_app::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::{ApiError, StatusCode};
    pub use crate::config::{AppConfig, ConfigService, NotFoundPolicy};
    pub use crate::controller::OrderController;
    pub use crate::domain::{Order, OrderId};
    pub use crate::error::{OrderAppError, Result};
    pub use crate::lifecycle::{Application, ApplicationBuilder, shutdown_signal};
    pub use crate::repository::{InMemoryOrderRepository, OrderRepository};
    #[cfg(feature = "sea-orm-db")]
    pub use crate::repository::SeaOrmOrderRepository;
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
