//! Output formatting for CLI.

use cashbill_client::{PaymentChannel, RegisteredPayment};
use cashbill_types::PaymentData;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for config initialization.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub config_path: String,
    pub mode: String,
}

impl Render for InitOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {}\n{} {}\n{}",
            "Configuration saved to:".green().bold(),
            self.config_path,
            "Mode:".bold(),
            self.mode,
            "Set shop_id and token under [cashbill] before talking to the provider.".dimmed()
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the channels command.
#[derive(Debug, Serialize)]
pub struct ChannelsOutput {
    pub language: String,
    pub channels: Vec<PaymentChannel>,
}

impl Render for ChannelsOutput {
    fn render_human(&self) -> String {
        if self.channels.is_empty() {
            return "No payment channels available.".yellow().to_string();
        }

        let mut lines = vec![format!(
            "{} ({})",
            "Payment channels".bold(),
            self.channels.len()
        )];
        for channel in &self.channels {
            lines.push(format!(
                "  {:<16} {} [{}]",
                channel.id.cyan(),
                channel.name,
                channel.available_currencies.join(", ")
            ));
            if !channel.description.is_empty() {
                lines.push(format!("  {:<16} {}", "", channel.description.dimmed()));
            }
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the register command.
#[derive(Debug, Serialize)]
pub struct RegisterOutput {
    pub id: String,
    pub redirect_url: String,
}

impl From<RegisteredPayment> for RegisterOutput {
    fn from(registered: RegisteredPayment) -> Self {
        Self {
            id: registered.id,
            redirect_url: registered.redirect_url,
        }
    }
}

impl Render for RegisterOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {}\n{} {}",
            "Registered:".green().bold(),
            self.id,
            "Redirect:".bold(),
            self.redirect_url
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the payment command.
#[derive(Debug)]
pub struct PaymentOutput {
    pub payment: PaymentData,
}

impl Render for PaymentOutput {
    fn render_human(&self) -> String {
        let payment = &self.payment;
        let status = payment.status();
        let status_text = if status.is_successful() {
            status.as_str().green().bold()
        } else if status.is_final() {
            status.as_str().red().bold()
        } else {
            status.as_str().yellow().bold()
        };

        let mut lines = vec![
            format!("{} {}", "Payment:".bold(), payment.id()),
            format!("{} {}", "Status:".bold(), status_text),
        ];
        if let Some(title) = payment.title() {
            lines.push(format!("{} \"{}\"", "Title:".bold(), title));
        }
        if let (Some(amount), Some(currency)) = (payment.amount(), payment.currency_code()) {
            lines.push(format!("{} {} {}", "Amount:".bold(), amount, currency));
        }
        if let (Some(amount), Some(currency)) = (
            payment.requested_amount(),
            payment.requested_currency_code(),
        ) {
            lines.push(format!("{} {} {}", "Requested:".bold(), amount, currency));
        }
        if let Some(channel) = payment.channel() {
            lines.push(format!("{} {}", "Channel:".bold(), channel));
        }
        let payer: Vec<&str> = [payment.first_name(), payment.last_name()]
            .into_iter()
            .flatten()
            .collect();
        if !payer.is_empty() {
            lines.push(format!("{} {}", "Payer:".bold(), payer.join(" ")));
        }
        if let Some(email) = payment.email() {
            lines.push(format!("{} {}", "Email:".bold(), email));
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        let status = self.payment.status();
        serde_json::to_string_pretty(&json!({
            "id": self.payment.id(),
            "status": status,
            "final": status.is_final(),
            "successful": status.is_successful(),
            "record": &self.payment,
        }))
        .unwrap_or_default()
    }
}

/// Output for the sign command.
#[derive(Debug, Serialize)]
pub struct SignOutput {
    pub payload: String,
    pub signature: String,
}

impl Render for SignOutput {
    fn render_human(&self) -> String {
        self.signature.clone()
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the serve command once the server stops.
#[derive(Debug, Serialize)]
pub struct ServeOutput {
    pub listen: String,
    pub path: String,
}

impl Render for ServeOutput {
    fn render_human(&self) -> String {
        format!("{} {}", "Webhook server stopped:".yellow(), self.listen)
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
