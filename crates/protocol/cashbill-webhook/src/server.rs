//! Webhook HTTP server.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::WebhookConfig;
use crate::error::{WebhookError, WebhookResult};
use crate::handler::WebhookHandler;
use crate::routes::router;

/// Serves the notification route on a bound TCP listener.
pub struct WebhookServer {
    router: Router,
    listener: TcpListener,
    path: Option<String>,
}

impl WebhookServer {
    /// Bind the listener and build the router.
    pub async fn new(handler: WebhookHandler, config: &WebhookConfig) -> WebhookResult<Self> {
        let router = router(handler, config)?;
        let addr = config.listen_addr()?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebhookError::server(format!("failed to bind to {}: {}", addr, e)))?;

        Ok(Self {
            router,
            listener,
            path: config.enabled.then(|| config.path.clone()),
        })
    }

    /// Address the server is bound to.
    pub fn local_addr(&self) -> WebhookResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Port the server is bound to.
    pub fn port(&self) -> WebhookResult<u16> {
        Ok(self.local_addr()?.port())
    }

    /// Serve until the process is stopped.
    pub async fn run(self) -> WebhookResult<()> {
        self.run_until(std::future::pending()).await
    }

    /// Serve until `shutdown` completes, then finish in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> WebhookResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.listener.local_addr()?;
        match &self.path {
            Some(path) => info!(listen = %addr, path = %path, "Webhook server listening"),
            None => info!(listen = %addr, "Webhook server listening (notification route disabled)"),
        }

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(listen = %addr, "Webhook server stopped");
        Ok(())
    }
}

impl std::fmt::Debug for WebhookServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookServer")
            .field("local_addr", &self.listener.local_addr().ok())
            .field("path", &self.path)
            .finish()
    }
}
