//! # Inventory Client
//!
//! Provides a high-level API for the inventory store.
//! Adjustments on unknown items come back as `Ok(None)`, not as errors.

use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::inventory_store::InventoryError;
use crate::lifecycle::{Command, CompanySystem, Reply};
use crate::model::{InventoryItem, ItemCreate, ItemId};
use tracing::{debug, instrument};

/// Client for inventory operations.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<CompanySystem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<CompanySystem>) -> Self {
        Self { inner }
    }
}

impl ActorClient<CompanySystem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<CompanySystem> {
        &self.inner
    }
}

impl InventoryClient {
    /// Adds the item, replacing any item with the same id.
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn add_item(&self, params: ItemCreate) -> Result<(), InventoryError> {
        match self.send(Command::AddItem(params)).await? {
            Reply::Done => Ok(()),
            other => unreachable!("AddItem must reply Done, got {other:?}"),
        }
    }

    /// Applies a signed delta. Returns the new quantity, or `None` for an unknown item.
    #[instrument(skip(self))]
    pub async fn adjust_quantity(&self, id: ItemId, delta: i64) -> Result<Option<i64>, InventoryError> {
        debug!("Adjusting {} by {}", id, delta);
        match self.send(Command::AdjustQuantity { id, delta }).await? {
            Reply::Quantity(quantity) => Ok(quantity),
            other => unreachable!("AdjustQuantity must reply Quantity, got {other:?}"),
        }
    }

    /// Deducts without a sufficiency check. Returns the new quantity, or `None` for an unknown item.
    #[instrument(skip(self))]
    pub async fn deduct(&self, id: ItemId, amount: i64) -> Result<Option<i64>, InventoryError> {
        match self.send(Command::Deduct { id, amount }).await? {
            Reply::Quantity(quantity) => Ok(quantity),
            other => unreachable!("Deduct must reply Quantity, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn is_available(&self, id: ItemId, required: i64) -> Result<bool, InventoryError> {
        match self.send(Command::IsAvailable { id, required }).await? {
            Reply::Available(available) => Ok(available),
            other => unreachable!("IsAvailable must reply Available, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Option<InventoryItem>, InventoryError> {
        match self.send(Command::GetItem(id)).await? {
            Reply::Item(item) => Ok(item),
            other => unreachable!("GetItem must reply Item, got {other:?}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        match self.send(Command::ListLowStock).await? {
            Reply::Items(items) => Ok(items),
            other => unreachable!("ListLowStock must reply Items, got {other:?}"),
        }
    }

    /// All items, in no particular order.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        match self.send(Command::ListItems).await? {
            Reply::Items(items) => Ok(items),
            other => unreachable!("ListItems must reply Items, got {other:?}"),
        }
    }
}
