//! Payment events.
//!
//! This module defines the events emitted after a notification has been
//! verified and the payment re-fetched from the provider.

use cashbill_types::{NotificationCommand, PaymentData};
use serde::Serialize;

/// Events emitted by the webhook handler.
///
/// The payment is always the provider's current record, never the
/// notification payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payment")]
pub enum PaymentEvent {
    /// The payment changed status.
    TransactionStatusChanged(PaymentData),

    /// The payer finished verification.
    VerificationFinished(PaymentData),
}

impl PaymentEvent {
    /// Build the event for a notification command.
    pub fn new(command: NotificationCommand, payment: PaymentData) -> Self {
        match command {
            NotificationCommand::TransactionStatusChanged => Self::TransactionStatusChanged(payment),
            NotificationCommand::VerificationFinished => Self::VerificationFinished(payment),
        }
    }

    /// The command that produced this event.
    pub fn command(&self) -> NotificationCommand {
        match self {
            Self::TransactionStatusChanged(_) => NotificationCommand::TransactionStatusChanged,
            Self::VerificationFinished(_) => NotificationCommand::VerificationFinished,
        }
    }

    /// The payment record.
    pub fn payment(&self) -> &PaymentData {
        match self {
            Self::TransactionStatusChanged(payment) | Self::VerificationFinished(payment) => payment,
        }
    }

    /// Take the payment record.
    pub fn into_payment(self) -> PaymentData {
        match self {
            Self::TransactionStatusChanged(payment) | Self::VerificationFinished(payment) => payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> PaymentData {
        PaymentData::try_from(json!({"id": "abc123", "status": "PositiveFinish"})).unwrap()
    }

    #[test]
    fn test_event_from_command() {
        let event = PaymentEvent::new(NotificationCommand::VerificationFinished, record());
        assert!(matches!(event, PaymentEvent::VerificationFinished(_)));
        assert_eq!(event.command(), NotificationCommand::VerificationFinished);
        assert_eq!(event.payment().id(), "abc123");
    }

    #[test]
    fn test_event_serialize() {
        let event = PaymentEvent::new(NotificationCommand::TransactionStatusChanged, record());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "TransactionStatusChanged");
        assert_eq!(value["payment"]["status"], "PositiveFinish");
    }
}
