//! Run the webhook server.

use std::sync::Arc;

use cashbill_webhook::{LoggingSink, WebhookConfig, WebhookHandler, WebhookServer};
use colored::Colorize;
use tracing::info;

use crate::commands::connect;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, ServeOutput};

/// Execute the serve command.
///
/// Runs until Ctrl-C. Events are written to the log.
pub async fn serve(config: CliConfig, format: OutputFormat, listen: Option<String>) -> CliResult<String> {
    let webhook = webhook_config(&config, listen)?;
    let client = connect(&config, true)?;

    let handler = WebhookHandler::new(client, Arc::new(LoggingSink));
    let server = WebhookServer::new(handler, &webhook).await?;
    let addr = server.local_addr()?;

    if format == OutputFormat::Human {
        eprintln!(
            "{} http://{}{}",
            "Listening for CashBill notifications on".green().bold(),
            addr,
            webhook.path
        );
    }
    info!(listen = %addr, mode = %config.cashbill.mode, "Starting webhook server");

    server.run_until(shutdown_signal()).await?;

    let output = ServeOutput {
        listen: addr.to_string(),
        path: webhook.path,
    };
    Ok(output.render(format))
}

/// Resolve the webhook configuration, refusing to serve a disabled route.
pub fn webhook_config(config: &CliConfig, listen: Option<String>) -> CliResult<WebhookConfig> {
    if !config.webhook.enabled {
        return Err(CliError::user(
            "The webhook route is disabled. Set enabled = true under [webhook] to serve it.",
        ));
    }

    let mut webhook = config.webhook.clone();
    if let Some(listen) = listen {
        webhook.listen = listen;
    }
    webhook.validate()?;
    Ok(webhook)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until killed.
        std::future::pending::<()>().await;
    }
}
