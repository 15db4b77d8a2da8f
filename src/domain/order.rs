use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type OrderId = i64;

/// An order record
///
/// Only the identifier is interpreted by the service. Every other top-level
/// JSON member is carried through storage untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<OrderId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Order {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { id: None, fields }
    }

    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
