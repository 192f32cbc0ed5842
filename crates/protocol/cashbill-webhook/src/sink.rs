//! Event sinks.
//!
//! The handler hands each [`PaymentEvent`] to an [`EventSink`] and returns
//! immediately. What consumers do with the event never changes the answer
//! sent to the provider.

use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::event::PaymentEvent;

/// Receives payment events.
pub trait EventSink: Send + Sync {
    /// Deliver an event. Must not block.
    fn emit(&self, event: PaymentEvent);
}

impl<F> EventSink for F
where
    F: Fn(PaymentEvent) + Send + Sync,
{
    fn emit(&self, event: PaymentEvent) {
        self(event)
    }
}

/// Default capacity of a [`BroadcastSink`] channel.
pub const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// Fans events out to any number of subscribers.
///
/// Events emitted while nobody is subscribed are dropped. Slow
/// subscribers lose the oldest events once the channel is full.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    sender: broadcast::Sender<PaymentEvent>,
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new(DEFAULT_BROADCAST_CAPACITY)
    }
}

impl BroadcastSink {
    /// Create a sink buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<PaymentEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventSink for BroadcastSink {
    fn emit(&self, event: PaymentEvent) {
        if self.sender.send(event).is_err() {
            debug!("No subscribers for payment event");
        }
    }
}

/// Writes events to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl EventSink for LoggingSink {
    fn emit(&self, event: PaymentEvent) {
        let payment = event.payment();
        info!(
            event = %event.command(),
            payment_id = %payment.id(),
            status = %payment.status(),
            amount = ?payment.amount(),
            currency = payment.currency_code().unwrap_or_default(),
            "Payment event"
        );
    }
}
