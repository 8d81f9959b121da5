//! # Company Records
//!
//! > **In-memory records for employees, work orders and inventory.**
//!
//! The crate keeps three independent record stores and one small business
//! workflow (fulfilling a stock request against inventory). Everything lives
//! in memory; nothing is persisted.
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`employee_store`], [`order_store`], [`inventory_store`], [`order_processing`])
//! Plain synchronous stores over the [`model`] types.
//! - **Employees and orders** are ordered lists. Ids may repeat; lookups and edits
//!   take the first match, while removing an employee takes every match.
//! - **Inventory** is a map. Adding an existing id replaces the item, and
//!   adjustments on unknown ids are silent no-ops.
//! - **Fulfillment** is all-or-nothing: check availability, then deduct.
//!
//! ### 2. The Aggregate ([`lifecycle::CompanySystem`])
//! Holds all four components. Build one at startup and pass it by reference.
//! There is no global instance.
//!
//! ### 3. The Audit Trail ([`audit`])
//! Every mutation reports a structured [`AuditEvent`](audit::AuditEvent) to an
//! injected [`AuditSink`](audit::AuditSink). The default sink logs via `tracing`;
//! tests use [`RecordingSink`](audit::RecordingSink) to assert on events.
//!
//! ### 4. Shared Access ([`framework`], [`clients`], [`lifecycle::RecordsService`])
//! To share one system between async callers, [`lifecycle::RecordsService`]
//! moves it into a [`ResourceActor`](framework::ResourceActor). The actor applies
//! requests one at a time, so every caller sees the same serial behavior as
//! direct calls. Typed clients ([`clients::EmployeeClient`], ...) hide the
//! message passing.
//!
//! ### 5. The Shell ([`shell`])
//! The numbered text menu used by the binary.
//!
//! ## Running
//!
//! ```bash
//! # Interactive menu with the audit trail on stderr
//! RUST_LOG=info cargo run
//! ```

pub mod audit;
pub mod clients;
pub mod employee_store;
pub mod framework;
pub mod inventory_store;
pub mod lifecycle;
pub mod model;
pub mod order_processing;
pub mod order_store;
pub mod shell;
