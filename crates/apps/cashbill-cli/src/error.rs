//! CLI error types.

use cashbill_client::ClientError;
use cashbill_types::TypesError;
use cashbill_webhook::WebhookError;
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid payment data.
    #[error("{0}")]
    Types(#[from] TypesError),

    /// Provider request failed.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Webhook server failed.
    #[error("{0}")]
    Webhook(#[from] WebhookError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// Config file already exists.
    #[error("Configuration already exists at {0}. Use --force to overwrite.")]
    ConfigExists(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) | Self::ConfigExists(_) | Self::Types(_) => 1,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) | Self::Client(ClientError::Config(_)) => 3,
            // Provider errors: 5
            Self::Client(_) => 5,
            // Webhook server errors: 6
            Self::Webhook(_) => 6,
            // IO errors: 9
            Self::Io(_) => 9,
            // JSON/format errors: 10
            Self::Json(_) => 10,
        }
    }

    /// Recovery hint shown under the error, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Config(_) | Self::Toml(_) => {
                Some("Check the config file, or run 'cashbill init' to write a fresh one")
            }
            Self::Client(e) => Some(e.suggestion()),
            Self::Types(TypesError::UnknownAttribute(_)) => {
                Some("Use a friendly attribute name such as title, amount or email")
            }
            Self::Webhook(WebhookError::Server(_)) => {
                Some("Check [webhook] listen and path in the config file")
            }
            Self::ConfigExists(_) => Some("Pass --force to replace it"),
            _ => None,
        }
    }
}
