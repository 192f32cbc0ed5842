//! Notification handler.

use std::sync::Arc;

use cashbill_client::CashBill;
use cashbill_types::{NotificationRequest, NOTIFICATION_ACK};
use tracing::{debug, info, warn};

use crate::error::{WebhookError, WebhookResult};
use crate::event::PaymentEvent;
use crate::sink::EventSink;

/// Verifies provider notifications and turns them into [`PaymentEvent`]s.
///
/// Each call is independent: check fields, check the command, check the
/// signature, re-fetch the payment, emit one event.
#[derive(Clone)]
pub struct WebhookHandler {
    client: CashBill,
    sink: Arc<dyn EventSink>,
}

impl WebhookHandler {
    /// Create a handler that fetches payments with `client` and emits to `sink`.
    pub fn new(client: CashBill, sink: Arc<dyn EventSink>) -> Self {
        Self { client, sink }
    }

    /// The client used to fetch payments.
    pub fn client(&self) -> &CashBill {
        &self.client
    }

    /// Check that `sign` matches `cmd` and `args`.
    pub fn verify(&self, request: &NotificationRequest) -> WebhookResult<()> {
        if self
            .client
            .signer()
            .verify_parts(request.signable_parts(), &request.sign)
        {
            Ok(())
        } else {
            Err(WebhookError::SignatureMismatch)
        }
    }

    /// Handle one notification.
    ///
    /// Returns the acknowledgement body on success. Nothing is fetched
    /// unless the signature checks out.
    pub async fn handle(&self, request: &NotificationRequest) -> WebhookResult<&'static str> {
        request.validate()?;
        let command = request.command()?;

        if let Err(e) = self.verify(request) {
            warn!(cmd = %command, args = %request.args, "Rejected notification with bad signature");
            return Err(e);
        }

        let payment_id = request.payment_id()?;
        debug!(cmd = %command, payment_id = %payment_id, "Notification verified");

        let payment = match self.client.payment(payment_id).await {
            Ok(payment) => payment,
            Err(e) => {
                warn!(
                    cmd = %command,
                    payment_id = %payment_id,
                    error = %e,
                    "Failed to fetch notified payment"
                );
                return Err(e.into());
            }
        };

        info!(
            cmd = %command,
            payment_id = %payment.id(),
            status = %payment.status(),
            "Payment notification handled"
        );
        self.sink.emit(PaymentEvent::new(command, payment));

        Ok(NOTIFICATION_ACK)
    }
}

impl std::fmt::Debug for WebhookHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookHandler")
            .field("client", &self.client)
            .finish()
    }
}
