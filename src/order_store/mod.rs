//! Work-order records: an ordered list with a status-based "active" filter.
//!
//! Orders are never removed. Like employees, ids may repeat and the first
//! match wins.

pub mod error;

pub use error::*;

use crate::audit::{AuditEvent, SharedSink};
use crate::model::{Order, OrderCreate, OrderId};
use tracing::debug;

pub struct OrderStore {
    orders: Vec<Order>,
    sink: SharedSink,
}

impl OrderStore {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            orders: Vec::new(),
            sink,
        }
    }

    pub fn add(&mut self, params: OrderCreate) {
        let order = Order::from(params);
        let id = order.id;
        self.orders.push(order);
        self.sink.record(&AuditEvent::OrderAdded { id });
    }

    /// Sets the status of the first order with `id`.
    pub fn update_status(&mut self, id: OrderId, status: impl Into<String>) -> Result<(), OrderError> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == id) else {
            debug!(%id, "Status update target not found");
            return Err(OrderError::NotFound(id));
        };
        order.status = status.into();
        self.sink.record(&AuditEvent::OrderStatusUpdated {
            id,
            status: order.status.clone(),
        });
        Ok(())
    }

    /// Orders whose status is not "Done", in insertion order.
    pub fn list_active(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.is_active()).collect()
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RecordingSink;
    use std::sync::Arc;

    fn store() -> (OrderStore, RecordingSink) {
        let sink = RecordingSink::new();
        (OrderStore::new(Arc::new(sink.clone())), sink)
    }

    fn place(store: &mut OrderStore, id: i32, title: &str, status: &str) {
        store.add(OrderCreate::new(id, title, "", status, "2024-03-01", "2024-04-01"));
    }

    #[test]
    fn test_list_active_filters_done_and_keeps_order() {
        let (mut store, _) = store();
        place(&mut store, 3, "Fence", "New");
        place(&mut store, 1, "Roof", "done");
        place(&mut store, 2, "Garage", "In progress");

        let titles: Vec<_> = store.list_active().iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Fence", "Garage"]);
    }

    #[test]
    fn test_update_status_first_match_only() {
        let (mut store, sink) = store();
        place(&mut store, 1, "Roof", "New");
        place(&mut store, 1, "Roof again", "New");

        store.update_status(OrderId(1), "Done").unwrap();

        assert_eq!(store.list_all()[0].status, "Done");
        assert_eq!(store.list_all()[1].status, "New");
        assert_eq!(store.list_active().len(), 1);
        assert_eq!(
            sink.events().last(),
            Some(&AuditEvent::OrderStatusUpdated { id: OrderId(1), status: "Done".into() })
        );
    }

    #[test]
    fn test_update_status_unknown_id_changes_nothing() {
        let (mut store, sink) = store();
        place(&mut store, 1, "Roof", "New");
        let before = store.list_all().to_vec();
        sink.clear();

        let result = store.update_status(OrderId(42), "Done");

        assert_eq!(result, Err(OrderError::NotFound(OrderId(42))));
        assert_eq!(store.list_all(), before.as_slice());
        assert_eq!(store.list_active().len(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_find_returns_first_of_duplicates() {
        let (mut store, _) = store();
        place(&mut store, 5, "A", "New");
        place(&mut store, 5, "B", "New");

        assert_eq!(store.find(OrderId(5)).unwrap().title, "A");
        assert!(store.find(OrderId(6)).is_none());
    }
}
