//! # Audit Events
//!
//! Every mutating store operation reports what it did to an [`AuditSink`].
//! The sink is injected when the stores are built, so production code logs
//! through [`TracingSink`] while tests capture events with [`RecordingSink`].

pub mod event;
pub mod sink;

pub use event::*;
pub use sink::*;
