//! Helper functions for creating test fixtures.
//!
//! Provides convenience functions for building client configurations,
//! provider payment records, signed notifications and pre-wired clients
//! and handlers.

use cashbill_client::{CashBill, CashBillConfig};
use cashbill_crypto::Signer;
use cashbill_types::NotificationRequest;
use cashbill_webhook::WebhookHandler;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{MockTransport, RecordingSink};

/// Shop id used by the fixtures.
pub const TEST_SHOP_ID: &str = "shop.example.com";
/// Token used by the fixtures.
pub const TEST_TOKEN: &str = "secret";

/// Sandbox configuration with the fixture shop and token.
pub fn test_config() -> CashBillConfig {
    CashBillConfig::sandbox(TEST_SHOP_ID, TEST_TOKEN)
}

/// Create a client backed by a mock transport.
///
/// Returns the client and the mock (for scripting responses and
/// assertions).
pub fn create_test_client(config: CashBillConfig) -> (CashBill, MockTransport) {
    let transport = MockTransport::new();
    let client = CashBill::with_transport(config, Arc::new(transport.clone()))
        .expect("test config should be valid");
    (client, transport)
}

/// Create a webhook handler with a mock transport and a recording sink.
pub fn create_test_handler() -> (WebhookHandler, MockTransport, RecordingSink) {
    let (client, transport) = create_test_client(test_config());
    let sink = RecordingSink::new();
    let handler = WebhookHandler::new(client, Arc::new(sink.clone()));
    (handler, transport, sink)
}

/// A complete payment record as the provider returns it.
pub fn payment_record_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": "Order #1",
        "status": status,
        "paymentChannel": "mtransfer",
        "description": "Test order",
        "additionalData": "order-1",
        "amount": { "value": 10.00, "currencyCode": "PLN" },
        "requestedAmount": { "value": 10.00, "currencyCode": "PLN" },
        "personalData": {
            "firstName": "Jan",
            "surname": "Kowalski",
            "email": "jan@example.com",
            "country": "PL",
            "city": "Katowice",
            "postcode": "40-000",
            "street": "Mariacka",
            "house": "1",
            "flat": "2"
        }
    })
}

/// A registration response as the provider returns it.
pub fn registered_payment_json(id: &str) -> Value {
    json!({
        "id": id,
        "redirectUrl": format!("https://pay.cashbill.pl/testws/payment/{}", id),
    })
}

/// A notification signed with `token`.
pub fn signed_notification(token: &str, cmd: &str, args: &str) -> NotificationRequest {
    let sign = Signer::new(token).sign_parts([cmd, args]);
    NotificationRequest::new(cmd, args, sign)
}
