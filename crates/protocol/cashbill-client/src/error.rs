//! Error types for the CashBill client.

use cashbill_types::TypesError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the provider.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid payment attribute or malformed record.
    #[error(transparent)]
    Types(#[from] TypesError),

    /// Network-level failure reaching the provider.
    #[error("CashBill transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-200 status.
    #[error("CashBill error ({status}): {body}")]
    Response {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Provider answered 200 with a body that is not the expected JSON.
    #[error("failed to decode CashBill response: {0}")]
    Decode(String),

    /// Client configuration is unusable.
    #[error("invalid CashBill configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::Types(TypesError::UnknownAttribute(_)) => {
                "Use one of the documented payment attribute names"
            }
            Self::Types(_) => "Check the values passed to the payment",
            Self::Transport(_) => "Check network connectivity to pay.cashbill.pl",
            Self::Response { status: 403, .. } => "Check the shop id, token and signature",
            Self::Response { .. } => "Inspect the response body returned by the provider",
            Self::Decode(_) => "The provider returned an unexpected body; check the endpoint mode",
            Self::Config(_) => "Set the shop id and token in the configuration",
        }
    }

    /// Returns true if the same request may succeed when sent again later.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Response { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status a webhook should answer with when this error
    /// interrupts notification handling.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Transport(_) | Self::Response { .. } | Self::Decode(_) => 502,
            Self::Types(TypesError::MissingField(_) | TypesError::UnknownStatus(_)) => 502,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
