//! Event sinks — the append-only notification boundary.
//!
//! The platform emits exactly one [`EventRecord`] per committed mutation,
//! in commit order. The sink is an external collaborator; these
//! implementations cover the in-process cases: discard, record (tests), and
//! structured logging.

use commons_types::EventRecord;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Consumer of committed state transitions.
pub trait EventSink: Send {
    fn emit(&self, event: EventRecord);
}

/// Discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: EventRecord) {}
}

/// Keeps every event in order behind a shared handle, for tests.
///
/// Clone the sink before handing it to the platform; both handles observe
/// the same stream.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted so far, in commit order.
    pub fn events(&self) -> Vec<EventRecord> {
        self.events.lock().expect("event log poisoned").clone()
    }

    /// Just the action names, in commit order.
    pub fn actions(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.action).collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: EventRecord) {
        self.events.lock().expect("event log poisoned").push(event);
    }
}

/// Emits each event as a structured log line.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: EventRecord) {
        info!(
            action = %event.action,
            actor = %event.actor,
            subject = ?event.subject,
            payload = %event.payload,
            "event"
        );
    }
}
