//! Error types for cashbill-types.

use thiserror::Error;

/// Result type for type-level operations.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors raised while building or decoding provider records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Attribute name outside the closed set of payment fields.
    #[error("unknown attribute [{0}]")]
    UnknownAttribute(String),

    /// Amount value is not a plain decimal number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code is not three ASCII letters.
    #[error("invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// A required field is absent from a decoded record.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Payment status outside the ten values the provider defines.
    #[error("unknown payment status: {0}")]
    UnknownStatus(String),

    /// Notification command outside the supported set.
    #[error("unknown notification command: {0}")]
    UnknownCommand(String),

    /// Endpoint mode other than `live` or `sandbox`.
    #[error("unknown mode: {0} (expected 'live' or 'sandbox')")]
    UnknownMode(String),

    /// Language not supported by the provider.
    #[error("unknown language: {0} (expected 'pl' or 'en')")]
    UnknownLanguage(String),

    /// Notification arguments do not start with a payment id.
    #[error("notification does not carry a payment id")]
    MissingPaymentId,

    /// Record could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TypesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
