use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::OrderRepository;
use crate::domain::{Order, OrderId};
use crate::error::{OrderAppError, Result};

#[derive(Default)]
struct Store {
    orders: BTreeMap<OrderId, Order>,
    last_id: OrderId,
}

/// Process-local order store
///
/// Identifiers start at 1 and are never reused. Assignment happens under the
/// write lock, so concurrent saves always get distinct ids.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    store: RwLock<Store>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.orders.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.orders.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>> {
        let store = self.store.read().await;
        tracing::debug!(count = store.orders.len(), "listing orders");
        Ok(store.orders.values().cloned().collect())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let store = self.store.read().await;
        let order = store.orders.get(&id).cloned();
        tracing::debug!(id, found = order.is_some(), "looked up order");
        Ok(order)
    }

    async fn save(&self, mut order: Order) -> Result<Order> {
        let mut store = self.store.write().await;
        let id = match order.id {
            Some(id) => {
                // Explicit ids push the sequence forward so generated ones never collide.
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                let next = store.last_id.checked_add(1).ok_or_else(|| {
                    OrderAppError::Storage("order id sequence exhausted".to_string())
                })?;
                store.last_id = next;
                next
            }
        };
        order.id = Some(id);
        let replaced = store.orders.insert(id, order.clone()).is_some();
        tracing::debug!(id, replaced, "saved order");
        Ok(order)
    }
}
