//! Fulfillment of stock requests against the [`InventoryStore`].
//!
//! A request either deducts the full quantity or nothing at all. The decision
//! is made from a single [`InventoryStore::is_available`] check; there is no
//! partial fulfillment and no retry.

pub mod error;

pub use error::*;

use crate::audit::{AuditEvent, SharedSink};
use crate::inventory_store::InventoryStore;
use crate::model::ItemId;
use tracing::{debug, instrument};

pub struct OrderProcessor {
    sink: SharedSink,
}

impl OrderProcessor {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }

    /// Deducts `quantity` units of `item_id` if available and returns the remaining stock.
    #[instrument(skip(self, inventory), fields(item_id = %item_id))]
    pub fn fulfill(
        &self,
        inventory: &mut InventoryStore,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<i64, ProcessingError> {
        if !inventory.is_available(item_id, quantity) {
            let available = inventory.get(item_id).map(|item| item.quantity);
            self.sink.record(&AuditEvent::FulfillmentRejected { item_id, quantity });
            return Err(ProcessingError::InsufficientStock {
                item_id,
                requested: quantity,
                available,
            });
        }

        // Availability implies the item exists.
        let remaining = inventory
            .deduct(item_id, quantity)
            .ok_or(ProcessingError::InsufficientStock {
                item_id,
                requested: quantity,
                available: None,
            })?;
        debug!(remaining, "Stock deducted");
        self.sink.record(&AuditEvent::OrderFulfilled { item_id, quantity });
        Ok(remaining)
    }
}
