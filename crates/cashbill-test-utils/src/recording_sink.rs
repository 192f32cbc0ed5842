//! Event sink that keeps every event for later assertions.

use cashbill_types::NotificationCommand;
use cashbill_webhook::{EventSink, PaymentEvent};
use std::sync::{Arc, RwLock};

/// Records emitted events in memory.
///
/// Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<RwLock<Vec<PaymentEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all events emitted so far.
    pub fn events(&self) -> Vec<PaymentEvent> {
        self.events.read().unwrap().clone()
    }

    /// Get the number of events emitted.
    pub fn event_count(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// Get the number of events produced by `command`.
    pub fn count_command(&self, command: NotificationCommand) -> usize {
        self.events
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.command() == command)
            .count()
    }

    /// Get the most recent event.
    pub fn last_event(&self) -> Option<PaymentEvent> {
        self.events.read().unwrap().last().cloned()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: PaymentEvent) {
        self.events.write().unwrap().push(event);
    }
}
