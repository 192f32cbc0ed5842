//! HTTP routes.

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use cashbill_types::NotificationRequest;
use tower_http::trace::TraceLayer;

use crate::config::{WebhookConfig, HEALTH_PATH};
use crate::error::{WebhookError, WebhookResult};
use crate::handler::WebhookHandler;

/// Build the router.
///
/// Mounts `/health` and, when enabled, the notification route at
/// `config.path` for both GET (query string) and POST (form body).
pub fn router(handler: WebhookHandler, config: &WebhookConfig) -> WebhookResult<Router> {
    config.validate()?;

    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().path().to_string();
            tracing::info_span!("request", method = %request.method(), uri)
        });

    let mut router = Router::new().route(HEALTH_PATH, get(health_check));
    if config.enabled {
        router = router.route(&config.path, get(notify_query).post(notify_form));
    }

    Ok(router.layer(trace_layer).with_state(handler))
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn notify_query(
    State(handler): State<WebhookHandler>,
    Query(request): Query<NotificationRequest>,
) -> Response {
    respond(handler.handle(&request).await)
}

async fn notify_form(
    State(handler): State<WebhookHandler>,
    Form(request): Form<NotificationRequest>,
) -> Response {
    respond(handler.handle(&request).await)
}

fn respond(result: WebhookResult<&'static str>) -> Response {
    match result {
        Ok(ack) => (StatusCode::OK, ack).into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(error: &WebhookError) -> Response {
    let status =
        StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, error.response_body()).into_response()
}
