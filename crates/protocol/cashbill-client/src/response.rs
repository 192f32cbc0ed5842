//! Typed provider responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Result of registering a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPayment {
    /// Provider-assigned payment id.
    pub id: String,
    /// Page the payer should be sent to.
    pub redirect_url: String,
}

/// Where to send the payer after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Payment id the redirect belongs to.
    pub payment_id: String,
    /// Target URL for the `Location` header.
    pub location: String,
}

impl Redirect {
    /// HTTP status for the redirect response.
    pub const STATUS: u16 = 302;
}

impl From<RegisteredPayment> for Redirect {
    fn from(registered: RegisteredPayment) -> Self {
        Self {
            payment_id: registered.id,
            location: registered.redirect_url,
        }
    }
}

/// A payment channel available to the shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentChannel {
    /// Value for the payment's `payment_channel` attribute.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_currencies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PaymentChannel {
    /// Check if the channel accepts the given currency.
    pub fn supports_currency(&self, code: &str) -> bool {
        self.available_currencies
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
    }
}
