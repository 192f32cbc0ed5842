//! Signing primitives for the CashBill payment API.
//!
//! Every authenticated exchange with the provider uses the same construction:
//!
//! ```text
//! Signature(parts) = hex(SHA1(parts[0] || parts[1] || ... || token))
//! ```
//!
//! It is used to sign payment registrations, to sign payment lookups by id,
//! and to verify inbound notifications.
//!
//! # Example
//!
//! ```
//! use cashbill_crypto::Signer;
//!
//! let signer = Signer::new("secret");
//! let signature = signer.sign_parts(["transactionStatusChanged", "abc123"]);
//! assert!(signer.verify_parts(["transactionStatusChanged", "abc123"], &signature));
//! ```

mod signer;

pub use signer::{Signer, SIGNATURE_HEX_LEN};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The shop's shared secret used for signing.
///
/// Cleared from memory on drop and never printed.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Check if no token has been configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token([REDACTED])")
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}
