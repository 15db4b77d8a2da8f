//! Persistence gateway for orders
//!
//! The HTTP layer only sees [`OrderRepository`]. Storage, querying and
//! consistency belong to the implementation behind it.

use async_trait::async_trait;

use crate::domain::{Order, OrderId};
use crate::error::Result;

pub mod memory;
#[cfg(feature = "sea-orm-db")]
pub mod relational;

pub use memory::InMemoryOrderRepository;
#[cfg(feature = "sea-orm-db")]
pub use relational::SeaOrmOrderRepository;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Every stored order. No ordering is promised to callers.
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// The order with `id`, or `None` when nothing is stored under it.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>>;

    /// Insert when `order.id` is absent, otherwise replace what is stored
    /// under that id. Returns the stored representation with its id set.
    async fn save(&self, order: Order) -> Result<Order>;
}
