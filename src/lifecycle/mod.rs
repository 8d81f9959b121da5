//! Construction and runtime orchestration.
//!
//! # Main Components
//!
//! - [`CompanySystem`] - The aggregate holding all stores, built once at startup
//! - [`Command`] / [`Reply`] - The messages the records actor understands
//! - [`RecordsService`] - Spawns the records actor and wires the typed clients
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod command;
pub mod company_system;
pub mod records_service;
pub mod tracing;

pub use command::*;
pub use company_system::*;
pub use records_service::*;
pub use self::tracing::setup_tracing;
