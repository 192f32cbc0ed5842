//! Notification handling for the CashBill payment API.
//!
//! The provider calls the shop back with `cmd`, `args` and `sign`. This
//! crate checks those, re-fetches the payment from the provider and emits a
//! [`PaymentEvent`]:
//!
//! ```text
//! provider ──GET/POST cmd,args,sign──→ WebhookHandler
//!                                         │ 1. fields present
//!                                         │ 2. cmd known
//!                                         │ 3. sign == SHA1(cmd+args+token)   ✗ → 403
//!                                         │ 4. payment id = args[0]
//!                                         │ 5. CashBill::payment(id)          ✗ → 502
//!                                         │ 6. EventSink::emit(event)
//! provider ←────────── 200 "OK" ──────────┘
//! ```
//!
//! # Components
//!
//! - **[`handler`]**: [`WebhookHandler`], one call per notification
//! - **[`event`]**: [`PaymentEvent`]
//! - **[`sink`]**: [`EventSink`] and the bundled sinks
//! - **[`routes`]** / **[`server`]**: axum router and server
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use cashbill_client::{CashBill, CashBillConfig};
//! use cashbill_webhook::{BroadcastSink, WebhookConfig, WebhookHandler, WebhookServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CashBill::new(CashBillConfig::sandbox("shop.example.com", "token"))?;
//! let sink = BroadcastSink::default();
//! let mut events = sink.subscribe();
//!
//! let handler = WebhookHandler::new(client, Arc::new(sink));
//! let server = WebhookServer::new(handler, &WebhookConfig::default()).await?;
//! tokio::spawn(server.run());
//!
//! while let Ok(event) = events.recv().await {
//!     println!("{} is now {}", event.payment().id(), event.payment().status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod routes;
pub mod server;
pub mod sink;

pub use config::{WebhookConfig, DEFAULT_LISTEN, DEFAULT_PATH, HEALTH_PATH};
pub use error::{WebhookError, WebhookResult};
pub use event::PaymentEvent;
pub use handler::WebhookHandler;
pub use routes::router;
pub use server::WebhookServer;
pub use sink::{BroadcastSink, EventSink, LoggingSink, DEFAULT_BROADCAST_CAPACITY};
