//! Integration tests for notification handling and the webhook router.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use cashbill_client::{ClientError, HttpResponse};
use cashbill_test_utils::{
    create_test_handler, payment_record_json, signed_notification, TEST_TOKEN,
};
use cashbill_types::{NotificationCommand, NotificationRequest};
use cashbill_webhook::{router, PaymentEvent, WebhookConfig, WebhookError};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Handler
// =============================================================================

#[tokio::test]
async fn test_status_change_fetches_and_emits() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::ok(
        payment_record_json("abc123", "PositiveFinish").to_string(),
    ));

    let request = signed_notification(TEST_TOKEN, "transactionStatusChanged", "abc123");
    assert_eq!(
        request.sign,
        "22d55824bcb69b25b8b61054011d3e0eb813406e"
    );

    let ack = handler.handle(&request).await.unwrap();
    assert_eq!(ack, "OK");

    assert_eq!(transport.request_count(), 1);
    assert!(transport
        .last_request()
        .unwrap()
        .url
        .ends_with("/payment/shop.example.com/abc123"));

    assert_eq!(sink.event_count(), 1);
    match sink.last_event().unwrap() {
        PaymentEvent::TransactionStatusChanged(payment) => {
            assert_eq!(payment.id(), "abc123");
            assert!(payment.is_positive_finish());
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[tokio::test]
async fn test_verification_finished_uses_first_argument() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::ok(
        payment_record_json("abc123", "PositiveAuthorization").to_string(),
    ));

    let request = signed_notification(TEST_TOKEN, "verificationFinished", "abc123,1,2");
    assert_eq!(request.sign, "abab557de7eabf64be017fc0d7650623293ec7f2");

    handler.handle(&request).await.unwrap();

    assert_eq!(sink.count_command(NotificationCommand::VerificationFinished), 1);
    assert!(transport.last_request().unwrap().url.ends_with("/abc123"));
}

#[tokio::test]
async fn test_bad_signature_never_fetches() {
    let (handler, transport, sink) = create_test_handler();

    for sign in [
        "0000000000000000000000000000000000000000",
        "22d55824bcb69b25b8b61054011d3e0eb813406f",
        "not-hex",
    ] {
        let request = NotificationRequest::new("transactionStatusChanged", "abc123", sign);
        let err = handler.handle(&request).await.unwrap_err();
        assert!(matches!(err, WebhookError::SignatureMismatch));
    }

    // Signed with a different token.
    let request = signed_notification("other", "transactionStatusChanged", "abc123");
    assert!(handler.handle(&request).await.is_err());

    assert_eq!(transport.request_count(), 0);
    assert_eq!(sink.event_count(), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_bad_gateway_and_emits_nothing() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::new(500, "provider down"));

    let request = signed_notification(TEST_TOKEN, "transactionStatusChanged", "abc123");
    let err = handler.handle(&request).await.unwrap_err();

    assert!(matches!(
        err,
        WebhookError::Client(ClientError::Response { status: 500, .. })
    ));
    assert_eq!(err.http_status(), 502);
    assert_eq!(sink.event_count(), 0);
}

#[tokio::test]
async fn test_repeated_notification_emits_each_time() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::ok(payment_record_json("abc123", "Start").to_string()));
    transport.push_response(HttpResponse::ok(
        payment_record_json("abc123", "PositiveFinish").to_string(),
    ));

    let request = signed_notification(TEST_TOKEN, "transactionStatusChanged", "abc123");
    handler.handle(&request).await.unwrap();
    handler.handle(&request).await.unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(events[0].payment().is_start());
    assert!(events[1].payment().is_positive_finish());
}

// =============================================================================
// Router
// =============================================================================

#[tokio::test]
async fn test_get_notification_acknowledged() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::ok(
        payment_record_json("abc123", "PositiveFinish").to_string(),
    ));
    let app = router(handler, &WebhookConfig::default()).unwrap();

    let request = signed_notification(TEST_TOKEN, "transactionStatusChanged", "abc123");
    let uri = format!(
        "/webhook/cashbill?cmd={}&args={}&sign={}",
        request.cmd, request.args, request.sign
    );
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
    assert_eq!(sink.event_count(), 1);
}

#[tokio::test]
async fn test_post_form_notification_acknowledged() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::ok(
        payment_record_json("abc123", "PositiveFinish").to_string(),
    ));
    let app = router(handler, &WebhookConfig::default()).unwrap();

    let request = signed_notification(TEST_TOKEN, "transactionStatusChanged", "abc123");
    let body = format!(
        "cmd={}&args={}&sign={}",
        request.cmd, request.args, request.sign
    );
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/webhook/cashbill")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sink.event_count(), 1);
}

#[tokio::test]
async fn test_forged_notification_forbidden() {
    let (handler, transport, _sink) = create_test_handler();
    let app = router(handler, &WebhookConfig::default()).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/webhook/cashbill?cmd=transactionStatusChanged&args=abc123&sign=forged")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response).await, "Forbidden");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_missing_field_bad_request() {
    let (handler, _transport, _sink) = create_test_handler();
    let app = router(handler, &WebhookConfig::default()).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/webhook/cashbill?cmd=transactionStatusChanged&args=abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_command_bad_request() {
    let (handler, transport, _sink) = create_test_handler();
    let app = router(handler, &WebhookConfig::default()).unwrap();

    let forged = signed_notification(TEST_TOKEN, "refund", "abc123");
    let uri = format!(
        "/webhook/cashbill?cmd={}&args={}&sign={}",
        forged.cmd, forged.args, forged.sign
    );
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_custom_path() {
    let (handler, _transport, _sink) = create_test_handler();
    let config = WebhookConfig {
        path: "/hooks/payments".into(),
        ..Default::default()
    };
    let app = router(handler, &config).unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/webhook/cashbill")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/hooks/payments?cmd=x")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_disabled_route_not_mounted() {
    let (handler, _transport, _sink) = create_test_handler();
    let config = WebhookConfig {
        enabled: false,
        ..Default::default()
    };
    let app = router(handler, &config).unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/webhook/cashbill?cmd=transactionStatusChanged")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_wildcard_path_is_an_error() {
    for path in ["/hooks/*", "/hooks/*rest", "/hooks/:id"] {
        let (handler, _transport, _sink) = create_test_handler();
        let config = WebhookConfig {
            path: path.into(),
            ..Default::default()
        };
        assert!(
            matches!(router(handler, &config), Err(WebhookError::Server(_))),
            "{}",
            path
        );
    }
}

#[tokio::test]
async fn test_partial_record_still_acknowledged() {
    let (handler, transport, sink) = create_test_handler();
    transport.push_response(HttpResponse::ok(
        serde_json::json!({
            "id": "abc123",
            "status": "PositiveFinish",
            "amount": { "value": 10 },
            "personalData": { "postcode": 40000 }
        })
        .to_string(),
    ));

    let request = signed_notification(TEST_TOKEN, "transactionStatusChanged", "abc123");
    assert_eq!(handler.handle(&request).await.unwrap(), "OK");

    let event = sink.last_event().unwrap();
    assert_eq!(event.payment().currency_code(), None);
    assert_eq!(event.payment().postcode(), Some("40000"));
}
