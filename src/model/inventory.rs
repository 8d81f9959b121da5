//! Represents a stocked item in the inventory.
//!
//! The quantity is a plain signed counter: deductions and negative adjustments
//! are applied as-is and may take it below zero. Arithmetic wraps at the
//! `i64` bounds.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub i32);

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub minimum_stock: i64,
}

impl InventoryItem {
    /// Creates a new InventoryItem instance.
    ///
    /// # Arguments
    /// * `id` - Caller-chosen identifier (the map key)
    /// * `name` - Item name
    /// * `quantity` - Current stock level
    /// * `minimum_stock` - Threshold below which the item counts as low stock
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, quantity: i64, minimum_stock: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            minimum_stock,
        }
    }

    /// Returns `true` if the quantity is strictly below the minimum stock.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.minimum_stock
    }
}

impl Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} - {} pcs", self.id.0, self.name, self.quantity)
    }
}

/// Payload for adding (or replacing) an inventory item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub minimum_stock: i64,
}

impl ItemCreate {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, quantity: i64, minimum_stock: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            minimum_stock,
        }
    }
}

impl From<ItemCreate> for InventoryItem {
    fn from(params: ItemCreate) -> Self {
        Self::new(params.id, params.name, params.quantity, params.minimum_stock)
    }
}
