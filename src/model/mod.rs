//! Pure data structures: the three record types and their payloads.

pub mod employee;
pub mod inventory;
pub mod order;

pub use employee::*;
pub use inventory::*;
pub use order::*;
