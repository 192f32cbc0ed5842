//! Outbound payment registration.
//!
//! A [`Payment`] is a sparse set of values keyed by [`Attribute`]. Attributes
//! have a friendly name (`first_name`) used by callers and configuration,
//! and a wire key (`personalData.firstName`) used in the request body.
//!
//! The declaration order of [`Attribute`] is the order in which values are
//! concatenated for signing, so it must never change:
//!
//! ```text
//! title, amount, currency_code, description, data, return_url,
//! negative_return_url, payment_channel, language_code, first_name,
//! last_name, email, country, city, postcode, street, house, flat,
//! referer, sign
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{TypesError, TypesResult};

/// A payment field.
///
/// Variants are declared in signing order; the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Title,
    Amount,
    CurrencyCode,
    Description,
    Data,
    ReturnUrl,
    NegativeReturnUrl,
    PaymentChannel,
    LanguageCode,
    FirstName,
    LastName,
    Email,
    Country,
    City,
    Postcode,
    Street,
    House,
    Flat,
    Referer,
    Sign,
}

impl Attribute {
    /// Every attribute, in signing order.
    pub const ALL: [Attribute; 20] = [
        Self::Title,
        Self::Amount,
        Self::CurrencyCode,
        Self::Description,
        Self::Data,
        Self::ReturnUrl,
        Self::NegativeReturnUrl,
        Self::PaymentChannel,
        Self::LanguageCode,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Country,
        Self::City,
        Self::Postcode,
        Self::Street,
        Self::House,
        Self::Flat,
        Self::Referer,
        Self::Sign,
    ];

    /// Friendly name, as accepted by [`Payment::set_attribute`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Amount => "amount",
            Self::CurrencyCode => "currency_code",
            Self::Description => "description",
            Self::Data => "data",
            Self::ReturnUrl => "return_url",
            Self::NegativeReturnUrl => "negative_return_url",
            Self::PaymentChannel => "payment_channel",
            Self::LanguageCode => "language_code",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Country => "country",
            Self::City => "city",
            Self::Postcode => "postcode",
            Self::Street => "street",
            Self::House => "house",
            Self::Flat => "flat",
            Self::Referer => "referer",
            Self::Sign => "sign",
        }
    }

    /// Field name in the provider's request body.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Amount => "amount.value",
            Self::CurrencyCode => "amount.currencyCode",
            Self::Description => "description",
            Self::Data => "additionalData",
            Self::ReturnUrl => "returnUrl",
            Self::NegativeReturnUrl => "negativeReturnUrl",
            Self::PaymentChannel => "paymentChannel",
            Self::LanguageCode => "languageCode",
            Self::FirstName => "personalData.firstName",
            Self::LastName => "personalData.surname",
            Self::Email => "personalData.email",
            Self::Country => "personalData.country",
            Self::City => "personalData.city",
            Self::Postcode => "personalData.postcode",
            Self::Street => "personalData.street",
            Self::House => "personalData.house",
            Self::Flat => "personalData.flat",
            Self::Referer => "referer",
            Self::Sign => "sign",
        }
    }

    /// Whether the value takes part in the payment signature.
    pub fn is_signable(&self) -> bool {
        !matches!(self, Self::Sign)
    }

    /// Validate and normalize a raw value for this attribute.
    fn normalize(&self, value: String) -> TypesResult<String> {
        match self {
            Self::Amount => {
                // Plain digits with an optional `.` fraction, nothing locale-specific.
                let raw = value.trim();
                let well_formed = raw.chars().any(|c| c.is_ascii_digit())
                    && raw.chars().all(|c| c.is_ascii_digit() || c == '.')
                    && raw.matches('.').count() <= 1;
                if !well_formed {
                    return Err(TypesError::InvalidAmount(value));
                }
                let amount = Decimal::from_str(raw)
                    .map_err(|_| TypesError::InvalidAmount(value.clone()))?;
                Ok(amount.to_string())
            }
            Self::CurrencyCode => {
                let code = value.trim();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(TypesError::InvalidCurrencyCode(value));
                }
                Ok(code.to_ascii_uppercase())
            }
            _ => Ok(value),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| TypesError::UnknownAttribute(s.to_string()))
    }
}

/// A payment waiting to be registered with the provider.
///
/// Values are kept as strings because they are folded verbatim into both
/// the request body and the signature. Amounts and currency codes are
/// normalized on the way in so both uses see the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payment {
    values: BTreeMap<Attribute, String>,
}

impl Payment {
    /// Create an empty payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payment from `(friendly name, value)` pairs.
    pub fn from_attributes<I, K, V>(attributes: I) -> TypesResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payment = Self::new();
        payment.set_attributes(attributes)?;
        Ok(payment)
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    /// Set an attribute value.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) -> TypesResult<&mut Self> {
        let value = attribute.normalize(value.into())?;
        self.values.insert(attribute, value);
        Ok(self)
    }

    /// Builder form of [`Payment::set`].
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> TypesResult<Self> {
        self.set(attribute, value)?;
        Ok(self)
    }

    /// Get an attribute value, or `""` when it was never set.
    pub fn get(&self, attribute: Attribute) -> &str {
        self.values
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Check if an attribute has an explicit value (even an empty one).
    pub fn is_set(&self, attribute: Attribute) -> bool {
        self.values.contains_key(&attribute)
    }

    /// Set the amount.
    pub fn set_amount(&mut self, amount: Decimal) -> TypesResult<&mut Self> {
        self.set(Attribute::Amount, amount.to_string())
    }

    /// Set the ISO 4217 currency code.
    pub fn set_currency_code(&mut self, code: &str) -> TypesResult<&mut Self> {
        self.set(Attribute::CurrencyCode, code)
    }

    /// Store the computed signature.
    pub fn set_sign(&mut self, sign: impl Into<String>) {
        self.values.insert(Attribute::Sign, sign.into());
    }

    /// The signature, if one has been computed.
    pub fn sign(&self) -> Option<&str> {
        self.values.get(&Attribute::Sign).map(String::as_str)
    }

    // =========================================================================
    // Name-based access
    // =========================================================================

    /// Set an attribute by friendly name.
    ///
    /// Fails with [`TypesError::UnknownAttribute`] for names outside the
    /// closed set.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> TypesResult<&mut Self> {
        let attribute = name.parse::<Attribute>()?;
        self.set(attribute, value)
    }

    /// Get an attribute by friendly name, or `""` when unset.
    pub fn get_attribute(&self, name: &str) -> TypesResult<&str> {
        let attribute = name.parse::<Attribute>()?;
        Ok(self.get(attribute))
    }

    /// Check if an attribute has an explicit value, by friendly name.
    pub fn is_attribute_set(&self, name: &str) -> TypesResult<bool> {
        let attribute = name.parse::<Attribute>()?;
        Ok(self.is_set(attribute))
    }

    /// Set several attributes in the order given.
    ///
    /// Not atomic: when a pair fails, the pairs before it stay applied.
    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> TypesResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in attributes {
            self.set_attribute(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Set attributes that have no explicit value yet.
    ///
    /// An attribute explicitly set to `""` counts as set and is kept.
    /// Unknown names fail like [`Payment::set_attributes`].
    pub fn set_default_attributes<I, K, V>(&mut self, attributes: I) -> TypesResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in attributes {
            let attribute = name.as_ref().parse::<Attribute>()?;
            if self.is_set(attribute) {
                continue;
            }
            self.set(attribute, value)?;
        }
        Ok(())
    }

    // =========================================================================
    // Wire form
    // =========================================================================

    /// Concatenate every value except the signature, in declaration order.
    ///
    /// Unset attributes contribute `""`, so the result depends only on the
    /// values and never on the order they were set in.
    pub fn signable_data(&self) -> String {
        Attribute::ALL
            .iter()
            .filter(|attr| attr.is_signable())
            .map(|attr| self.get(*attr))
            .collect()
    }

    /// Populated values keyed by wire name, in declaration order.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        self.values
            .iter()
            .map(|(attr, value)| (attr.wire_key(), value.as_str()))
            .collect()
    }

    /// Number of attributes with an explicit value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no attribute has been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Payment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.attributes() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
