use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use std::sync::Arc;

use crate::config::NotFoundPolicy;
use crate::domain::{Order, OrderId};
use crate::error::{OrderAppError, Result};
use crate::repository::OrderRepository;

pub const BASE_PATH: &str = "/api/orders";
pub const HELLO_MESSAGE: &str = "Hello from CI/CD demo!";

/// Order endpoints under `/api/orders`
///
/// | Method | Path                | Gateway call |
/// |--------|---------------------|--------------|
/// | GET    | `/api/orders`       | `find_all`   |
/// | GET    | `/api/orders/{id}`  | `find_by_id` |
/// | POST   | `/api/orders`       | `save`       |
/// | GET    | `/api/orders/hello` | none         |
pub struct OrderController {
    repository: Arc<dyn OrderRepository>,
    not_found_policy: NotFoundPolicy,
}

impl OrderController {
    pub fn new(repository: Arc<dyn OrderRepository>, not_found_policy: NotFoundPolicy) -> Self {
        Self {
            repository,
            not_found_policy,
        }
    }

    pub fn router(controller: Arc<Self>) -> Router {
        Router::new()
            .route(BASE_PATH, get(find_all).post(save))
            .route(&format!("{}/hello", BASE_PATH), get(hello))
            .route(&format!("{}/{{id}}", BASE_PATH), get(find_one))
            .with_state(controller)
    }

    pub async fn find_all(&self) -> Result<Vec<Order>> {
        self.repository.find_all().await
    }

    /// `None` means the id is unknown and the policy asks for a null body.
    pub async fn find_one(&self, id: OrderId) -> Result<Option<Order>> {
        match self.repository.find_by_id(id).await? {
            Some(order) => Ok(Some(order)),
            None => match self.not_found_policy {
                NotFoundPolicy::NotFound => Err(OrderAppError::NotFound { id }),
                NotFoundPolicy::NullBody => Ok(None),
            },
        }
    }

    pub async fn save(&self, order: Order) -> Result<Order> {
        self.repository.save(order).await
    }

    pub fn hello(&self) -> &'static str {
        HELLO_MESSAGE
    }
}

async fn find_all(State(controller): State<Arc<OrderController>>) -> Result<Json<Vec<Order>>> {
    Ok(Json(controller.find_all().await?))
}

async fn find_one(
    State(controller): State<Arc<OrderController>>,
    Path(id): Path<OrderId>,
) -> Result<Response> {
    let response = match controller.find_one(id).await? {
        Some(order) => Json(order).into_response(),
        None => Json(Value::Null).into_response(),
    };
    Ok(response)
}

async fn save(
    State(controller): State<Arc<OrderController>>,
    Json(order): Json<Order>,
) -> Result<Json<Order>> {
    Ok(Json(controller.save(order).await?))
}

async fn hello(State(controller): State<Arc<OrderController>>) -> &'static str {
    controller.hello()
}
