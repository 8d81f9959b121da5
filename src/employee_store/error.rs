//! Error types for the Employee store.

use crate::model::EmployeeId;
use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    /// No employee with this id exists.
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    /// An error occurred while communicating with the records actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EmployeeError {
    fn from(msg: String) -> Self {
        EmployeeError::ActorCommunicationError(msg)
    }
}
