use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status value that marks an order as no longer active.
pub const DONE_STATUS: &str = "Done";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A work order.
///
/// Dates are kept as the free-form strings the caller entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub received_date: String,
    pub due_date: String,
}

impl Order {
    /// Returns `true` unless the status is [`DONE_STATUS`], ignoring case.
    pub fn is_active(&self) -> bool {
        !self.status.eq_ignore_ascii_case(DONE_STATUS)
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} - {}", self.id.0, self.title, self.status)
    }
}

/// Payload for adding a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub id: OrderId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub received_date: String,
    pub due_date: String,
}

impl OrderCreate {
    pub fn new(
        id: impl Into<OrderId>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        received_date: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: status.into(),
            received_date: received_date.into(),
            due_date: due_date.into(),
        }
    }
}

impl From<OrderCreate> for Order {
    fn from(params: OrderCreate) -> Self {
        Self {
            id: params.id,
            title: params.title,
            description: params.description,
            status: params.status,
            received_date: params.received_date,
            due_date: params.due_date,
        }
    }
}
