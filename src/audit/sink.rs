use super::AuditEvent;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Receives audit events from the stores.
///
/// Implementations must not fail: recording is a side effect and never
/// changes the outcome of the operation that produced the event.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: &AuditEvent);
}

/// Shared handle used by every store in one [`CompanySystem`](crate::lifecycle::CompanySystem).
pub type SharedSink = Arc<dyn AuditSink>;

/// Writes each event as a structured `tracing` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn record(&self, event: &AuditEvent) {
        let kind = event.kind();
        let subject = event.subject();
        if event.is_rejection() {
            warn!(kind, %subject, ?event, "Audit");
        } else {
            info!(kind, %subject, "Audit");
        }
    }
}

/// Keeps every event in memory, in emission order.
///
/// Clones share the same buffer, so a test can keep one handle and pass
/// another into the system.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The `kind()` of every recorded event.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events().iter().map(AuditEvent::kind).collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl AuditSink for RecordingSink {
    fn record(&self, event: &AuditEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}
