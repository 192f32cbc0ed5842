//! Error types for notification handling.

use cashbill_client::ClientError;
use cashbill_types::TypesError;
use thiserror::Error;

/// Result type for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Errors that can occur while handling a notification.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// A notification field is absent or empty.
    #[error("missing notification field: {0}")]
    MissingField(&'static str),

    /// `cmd` is not one of the supported commands.
    #[error("unknown notification command: {0}")]
    UnknownCommand(String),

    /// `sign` does not match the recomputed signature.
    #[error("notification signature mismatch")]
    SignatureMismatch,

    /// `args` does not start with a payment id.
    #[error("notification does not carry a payment id")]
    MissingPaymentId,

    /// Fetching the payment from the provider failed.
    #[error("failed to fetch payment: {0}")]
    Client(#[from] ClientError),

    /// The HTTP server could not bind or serve.
    #[error("webhook server error: {0}")]
    Server(String),
}

impl WebhookError {
    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// HTTP status to answer the provider with.
    ///
    /// Malformed notifications get 4xx and are not redelivered. Fetch
    /// failures get 5xx so the provider tries again later.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingField(_) | Self::UnknownCommand(_) | Self::MissingPaymentId => 400,
            Self::SignatureMismatch => 403,
            Self::Client(e) => e.http_status(),
            Self::Server(_) => 500,
        }
    }

    /// Body sent with the error status.
    pub fn response_body(&self) -> String {
        match self {
            Self::SignatureMismatch => "Forbidden".to_string(),
            Self::Client(_) | Self::Server(_) => "Bad Gateway".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<TypesError> for WebhookError {
    fn from(e: TypesError) -> Self {
        match e {
            TypesError::MissingField(field) => Self::MissingField(field),
            TypesError::UnknownCommand(cmd) => Self::UnknownCommand(cmd),
            TypesError::MissingPaymentId => Self::MissingPaymentId,
            other => Self::Client(ClientError::Types(other)),
        }
    }
}

impl From<std::io::Error> for WebhookError {
    fn from(e: std::io::Error) -> Self {
        Self::Server(e.to_string())
    }
}
