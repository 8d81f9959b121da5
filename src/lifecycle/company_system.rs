use crate::audit::{SharedSink, TracingSink};
use crate::employee_store::EmployeeStore;
use crate::inventory_store::InventoryStore;
use crate::model::ItemId;
use crate::order_processing::{OrderProcessor, ProcessingError};
use crate::order_store::OrderStore;
use std::sync::Arc;
use tracing::info;

/// The aggregate that owns every store.
///
/// Build one at startup and pass it by reference (or move it into a
/// [`RecordsService`](super::RecordsService) for shared async access).
/// All stores report to the same audit sink.
///
/// # Example
///
/// ```ignore
/// let mut system = CompanySystem::new(Arc::new(TracingSink));
/// system.inventory.add(ItemCreate::new(1, "Widget", 5, 10));
/// let remaining = system.fulfill(ItemId(1), 3)?;
/// ```
pub struct CompanySystem {
    pub employees: EmployeeStore,
    pub orders: OrderStore,
    pub inventory: InventoryStore,
    pub processor: OrderProcessor,
}

impl CompanySystem {
    pub fn new(sink: SharedSink) -> Self {
        let system = Self {
            employees: EmployeeStore::new(sink.clone()),
            orders: OrderStore::new(sink.clone()),
            inventory: InventoryStore::new(sink.clone()),
            processor: OrderProcessor::new(sink),
        };
        info!("Company system created");
        system
    }

    /// Runs the fulfillment workflow against this system's inventory.
    pub fn fulfill(&mut self, item_id: ItemId, quantity: i64) -> Result<i64, ProcessingError> {
        self.processor.fulfill(&mut self.inventory, item_id, quantity)
    }
}

impl Default for CompanySystem {
    /// A system that logs audit events through `tracing`.
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RecordingSink;
    use crate::model::{EmployeeCreate, EmployeeId, ItemCreate, OrderCreate, OrderId};

    #[test]
    fn test_stores_share_one_sink_and_independent_id_spaces() {
        let sink = RecordingSink::new();
        let mut system = CompanySystem::new(Arc::new(sink.clone()));

        system.employees.add(EmployeeCreate::new("Anna", "Novak", 1, "Clerk", 900.0));
        system.orders.add(OrderCreate::new(1, "Roof", "", "New", "", ""));
        system.inventory.add(ItemCreate::new(1, "Widget", 5, 10));

        assert!(system.employees.find(EmployeeId(1)).is_some());
        assert!(system.orders.find(OrderId(1)).is_some());
        assert!(system.inventory.get(ItemId(1)).is_some());
        assert_eq!(
            sink.kinds(),
            vec!["employee.added", "order.added", "inventory.item_added"]
        );
    }

    #[test]
    fn test_fulfill_uses_own_inventory() {
        let mut system = CompanySystem::new(Arc::new(RecordingSink::new()));
        system.inventory.add(ItemCreate::new(1, "Widget", 5, 10));

        assert_eq!(system.fulfill(ItemId(1), 3), Ok(2));
        assert!(system.fulfill(ItemId(1), 5).is_err());
        assert_eq!(system.inventory.get(ItemId(1)).unwrap().quantity, 2);
    }
}
