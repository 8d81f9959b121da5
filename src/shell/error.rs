//! Error types for the interactive shell.

use crate::employee_store::EmployeeError;
use crate::inventory_store::InventoryError;
use crate::order_processing::ProcessingError;
use crate::order_store::OrderError;
use thiserror::Error;

/// Errors that can occur while running the shell.
///
/// Only `Io` and `Service` end the session. `InvalidNumber` is reported to
/// the user and the menu is shown again. `EndOfInput` ends it cleanly.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended")]
    EndOfInput,

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The records service could not be reached.
    #[error("Records service error: {0}")]
    Service(String),
}

impl From<EmployeeError> for ShellError {
    fn from(e: EmployeeError) -> Self {
        ShellError::Service(e.to_string())
    }
}

impl From<OrderError> for ShellError {
    fn from(e: OrderError) -> Self {
        ShellError::Service(e.to_string())
    }
}

impl From<InventoryError> for ShellError {
    fn from(e: InventoryError) -> Self {
        ShellError::Service(e.to_string())
    }
}

impl From<ProcessingError> for ShellError {
    fn from(e: ProcessingError) -> Self {
        ShellError::Service(e.to_string())
    }
}
