use crate::model::{EmployeeId, ItemId, OrderId};
use serde::{Deserialize, Serialize};

/// A structured record of one mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEvent {
    EmployeeAdded { id: EmployeeId },
    EmployeeEdited { id: EmployeeId },
    /// Emitted even when nothing matched; `removed` is then zero.
    EmployeeRemoved { id: EmployeeId, removed: usize },
    OrderAdded { id: OrderId },
    OrderStatusUpdated { id: OrderId, status: String },
    /// `replaced` is set when an item with the same id already existed.
    ItemAdded { id: ItemId, replaced: bool },
    QuantityAdjusted { id: ItemId, delta: i64, quantity: i64 },
    StockDeducted { id: ItemId, amount: i64, quantity: i64 },
    OrderFulfilled { item_id: ItemId, quantity: i64 },
    FulfillmentRejected { item_id: ItemId, quantity: i64 },
}

impl AuditEvent {
    /// Stable dotted name of the operation, e.g. `employee.added`.
    pub fn kind(&self) -> &'static str {
        match self {
            AuditEvent::EmployeeAdded { .. } => "employee.added",
            AuditEvent::EmployeeEdited { .. } => "employee.edited",
            AuditEvent::EmployeeRemoved { .. } => "employee.removed",
            AuditEvent::OrderAdded { .. } => "order.added",
            AuditEvent::OrderStatusUpdated { .. } => "order.status_updated",
            AuditEvent::ItemAdded { .. } => "inventory.item_added",
            AuditEvent::QuantityAdjusted { .. } => "inventory.quantity_adjusted",
            AuditEvent::StockDeducted { .. } => "inventory.stock_deducted",
            AuditEvent::OrderFulfilled { .. } => "processing.fulfilled",
            AuditEvent::FulfillmentRejected { .. } => "processing.rejected",
        }
    }

    /// The affected record, rendered with its typed prefix.
    pub fn subject(&self) -> String {
        match self {
            AuditEvent::EmployeeAdded { id }
            | AuditEvent::EmployeeEdited { id }
            | AuditEvent::EmployeeRemoved { id, .. } => id.to_string(),
            AuditEvent::OrderAdded { id } | AuditEvent::OrderStatusUpdated { id, .. } => id.to_string(),
            AuditEvent::ItemAdded { id, .. }
            | AuditEvent::QuantityAdjusted { id, .. }
            | AuditEvent::StockDeducted { id, .. } => id.to_string(),
            AuditEvent::OrderFulfilled { item_id, .. }
            | AuditEvent::FulfillmentRejected { item_id, .. } => item_id.to_string(),
        }
    }

    /// Business-rule rejections are reported at a higher level than plain mutations.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuditEvent::FulfillmentRejected { .. })
    }
}
