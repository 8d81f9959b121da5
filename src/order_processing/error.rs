//! Error types for order processing.

use crate::model::ItemId;
use thiserror::Error;

/// Errors that can occur while fulfilling a stock request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessingError {
    /// The item is unknown (`available` is `None`) or holds fewer units than requested.
    #[error("Insufficient stock for {item_id}: requested {requested}, available {}", describe_available(.available))]
    InsufficientStock {
        item_id: ItemId,
        requested: i64,
        available: Option<i64>,
    },

    /// An error occurred while communicating with the records actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

fn describe_available(available: &Option<i64>) -> String {
    available.map_or_else(|| "none".to_string(), |a| a.to_string())
}

impl From<String> for ProcessingError {
    fn from(msg: String) -> Self {
        ProcessingError::ActorCommunicationError(msg)
    }
}
