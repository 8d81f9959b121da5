//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod employee_client;
pub mod inventory_client;
pub mod order_client;
pub mod processing_client;

pub use actor_client::ActorClient;
pub use employee_client::*;
pub use inventory_client::*;
pub use order_client::*;
pub use processing_client::*;
