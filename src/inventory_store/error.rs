//! Error types for the Inventory store.
//!
//! Store operations on an unknown item are silent no-ops, so the only
//! failure left is reaching the records actor at all.

use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// An error occurred while communicating with the records actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
