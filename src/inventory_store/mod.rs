//! # Inventory Store
//!
//! Inventory items keyed by [`ItemId`] with map semantics: adding an existing
//! id replaces the previous record, and listing order is unspecified.
//!
//! ## Unknown ids
//!
//! [`InventoryStore::adjust_quantity`] and [`InventoryStore::deduct`] do nothing
//! when the id is absent. They report this only through their `None` return;
//! no error is raised and no audit event is emitted.
//!
//! ## Stock levels
//!
//! Quantities are never clamped and wrap at the `i64` bounds. A deduction
//! larger than the stock leaves a negative quantity; callers that need a
//! sufficiency check go through
//! [`OrderProcessor`](crate::order_processing::OrderProcessor).

pub mod error;

pub use error::*;

use crate::audit::{AuditEvent, SharedSink};
use crate::model::{InventoryItem, ItemCreate, ItemId};
use std::collections::HashMap;
use tracing::debug;

pub struct InventoryStore {
    items: HashMap<ItemId, InventoryItem>,
    sink: SharedSink,
}

impl InventoryStore {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            items: HashMap::new(),
            sink,
        }
    }

    /// Inserts the item, fully replacing any item with the same id.
    pub fn add(&mut self, params: ItemCreate) {
        let item = InventoryItem::from(params);
        let id = item.id;
        let replaced = self.items.insert(id, item).is_some();
        self.sink.record(&AuditEvent::ItemAdded { id, replaced });
    }

    /// Applies `delta` to the quantity and returns the new quantity.
    ///
    /// Wraps on overflow.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: i64) -> Option<i64> {
        let Some(item) = self.items.get_mut(&id) else {
            debug!(%id, delta, "Adjust skipped, unknown item");
            return None;
        };
        item.quantity = item.quantity.wrapping_add(delta);
        let quantity = item.quantity;
        self.sink.record(&AuditEvent::QuantityAdjusted { id, delta, quantity });
        Some(quantity)
    }

    /// Subtracts `amount` without checking that enough stock exists.
    ///
    /// Wraps on overflow.
    pub fn deduct(&mut self, id: ItemId, amount: i64) -> Option<i64> {
        let Some(item) = self.items.get_mut(&id) else {
            debug!(%id, amount, "Deduct skipped, unknown item");
            return None;
        };
        item.quantity = item.quantity.wrapping_sub(amount);
        let quantity = item.quantity;
        self.sink.record(&AuditEvent::StockDeducted { id, amount, quantity });
        Some(quantity)
    }

    /// `true` iff the item exists and holds at least `required` units.
    pub fn is_available(&self, id: ItemId, required: i64) -> bool {
        self.items
            .get(&id)
            .is_some_and(|item| item.quantity >= required)
    }

    pub fn list_low_stock(&self) -> Vec<&InventoryItem> {
        self.items.values().filter(|item| item.is_low_stock()).collect()
    }

    pub fn list_all(&self) -> Vec<&InventoryItem> {
        self.items.values().collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RecordingSink;
    use std::sync::Arc;

    fn store() -> (InventoryStore, RecordingSink) {
        let sink = RecordingSink::new();
        (InventoryStore::new(Arc::new(sink.clone())), sink)
    }

    #[test]
    fn test_add_replaces_existing_item() {
        let (mut store, sink) = store();
        store.add(ItemCreate::new(5, "Bolt", 10, 2));
        store.add(ItemCreate::new(5, "Bolt M8", 3, 4));

        let all = store.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity, 3);
        assert_eq!(all[0].name, "Bolt M8");
        assert_eq!(
            sink.events(),
            vec![
                AuditEvent::ItemAdded { id: ItemId(5), replaced: false },
                AuditEvent::ItemAdded { id: ItemId(5), replaced: true },
            ]
        );
    }

    #[test]
    fn test_adjust_quantity_applies_signed_delta() {
        let (mut store, _) = store();
        store.add(ItemCreate::new(1, "Widget", 5, 0));

        assert_eq!(store.adjust_quantity(ItemId(1), 4), Some(9));
        assert_eq!(store.adjust_quantity(ItemId(1), -12), Some(-3));
        assert_eq!(store.get(ItemId(1)).unwrap().quantity, -3);
    }

    #[test]
    fn test_unknown_item_is_silent_noop() {
        let (mut store, sink) = store();
        store.add(ItemCreate::new(1, "Widget", 5, 0));
        sink.clear();

        assert_eq!(store.adjust_quantity(ItemId(2), 10), None);
        assert_eq!(store.deduct(ItemId(2), 10), None);

        assert_eq!(store.len(), 1);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_deduct_does_not_check_sufficiency() {
        let (mut store, sink) = store();
        store.add(ItemCreate::new(1, "Widget", 2, 0));

        assert_eq!(store.deduct(ItemId(1), 5), Some(-3));
        assert_eq!(
            sink.events().last(),
            Some(&AuditEvent::StockDeducted { id: ItemId(1), amount: 5, quantity: -3 })
        );
    }

    #[test]
    fn test_is_available() {
        let (mut store, _) = store();
        store.add(ItemCreate::new(1, "Widget", 5, 0));

        assert!(store.is_available(ItemId(1), 5));
        assert!(store.is_available(ItemId(1), 0));
        assert!(!store.is_available(ItemId(1), 6));
    }

    #[test]
    fn test_is_available_false_for_unknown_id() {
        let (store, _) = store();

        assert!(!store.is_available(ItemId(1), 1));
        assert!(!store.is_available(ItemId(1), 0));
        assert!(!store.is_available(ItemId(1), -5));
    }

    #[test]
    fn test_list_low_stock_is_strictly_below_minimum() {
        let (mut store, _) = store();
        store.add(ItemCreate::new(1, "Widget", 5, 10));
        store.add(ItemCreate::new(2, "Gadget", 10, 10));
        store.add(ItemCreate::new(3, "Gizmo", 20, 10));

        let low: Vec<_> = store.list_low_stock().iter().map(|i| i.id).collect();
        assert_eq!(low, vec![ItemId(1)]);
    }

    #[test]
    fn test_adjust_quantity_wraps_at_bounds() {
        let (mut store, sink) = store();
        store.add(ItemCreate::new(1, "Widget", i64::MAX, 0));
        store.add(ItemCreate::new(2, "Gadget", i64::MIN, 0));

        assert_eq!(store.adjust_quantity(ItemId(1), 1), Some(i64::MIN));
        assert_eq!(store.adjust_quantity(ItemId(2), -1), Some(i64::MAX));
        assert_eq!(store.get(ItemId(1)).unwrap().quantity, i64::MIN);
        assert_eq!(sink.events().len(), 4);
    }

    #[test]
    fn test_deduct_wraps_at_bounds() {
        let (mut store, _) = store();
        store.add(ItemCreate::new(1, "Widget", 5, 0));
        store.add(ItemCreate::new(2, "Gadget", i64::MIN, 0));

        assert_eq!(store.deduct(ItemId(1), i64::MIN), Some(i64::MIN + 5));
        assert_eq!(store.deduct(ItemId(2), 1), Some(i64::MAX));
    }
}
