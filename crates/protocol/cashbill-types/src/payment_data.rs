//! Payment records fetched from the provider.
//!
//! A [`PaymentData`] is a read-only snapshot of what the provider knows
//! about a payment. It is the only source that should be trusted for a
//! payment's status and amounts.
//!
//! Field access policy: `id` and `status` are required when decoding and
//! have plain accessors. Every other field is optional, because provider
//! responses are not schema-guaranteed, and its accessor returns `Option`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{TypesError, TypesResult};

/// Status of a payment, as reported by the provider.
///
/// The provider owns the state machine; this type only classifies a
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    PreStart,
    Start,
    Abort,
    Fraud,
    PositiveAuthorization,
    NegativeAuthorization,
    PositiveFinish,
    NegativeFinish,
    TimeExceeded,
    CriticalError,
}

impl PaymentStatus {
    /// Every status the provider defines.
    pub const ALL: [PaymentStatus; 10] = [
        Self::PreStart,
        Self::Start,
        Self::Abort,
        Self::Fraud,
        Self::PositiveAuthorization,
        Self::NegativeAuthorization,
        Self::PositiveFinish,
        Self::NegativeFinish,
        Self::TimeExceeded,
        Self::CriticalError,
    ];

    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreStart => "PreStart",
            Self::Start => "Start",
            Self::Abort => "Abort",
            Self::Fraud => "Fraud",
            Self::PositiveAuthorization => "PositiveAuthorization",
            Self::NegativeAuthorization => "NegativeAuthorization",
            Self::PositiveFinish => "PositiveFinish",
            Self::NegativeFinish => "NegativeFinish",
            Self::TimeExceeded => "TimeExceeded",
            Self::CriticalError => "CriticalError",
        }
    }

    /// The provider will not move the payment out of this status.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Abort
                | Self::Fraud
                | Self::PositiveFinish
                | Self::NegativeFinish
                | Self::TimeExceeded
                | Self::CriticalError
        )
    }

    /// Funds were authorized or the payment was completed.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::PositiveAuthorization | Self::PositiveFinish)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypesError::UnknownStatus(s.to_string()))
    }
}

/// A monetary amount as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amount {
    /// Numeric value.
    pub value: Option<Decimal>,
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
}

impl Amount {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            value: object.get("value").and_then(decimal),
            currency_code: text(object, "currencyCode"),
        })
    }
}

/// Payer details attached to a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalData {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub street: Option<String>,
    pub house: Option<String>,
    pub flat: Option<String>,
}

impl PersonalData {
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            first_name: text(object, "firstName"),
            surname: text(object, "surname"),
            email: text(object, "email"),
            country: text(object, "country"),
            city: text(object, "city"),
            postcode: text(object, "postcode"),
            street: text(object, "street"),
            house: text(object, "house"),
            flat: text(object, "flat"),
        })
    }
}

/// Read an optional text field. Scalars are rendered as text; anything
/// else counts as absent.
fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A decoded payment record.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentData {
    id: String,
    status: PaymentStatus,
    title: Option<String>,
    channel: Option<String>,
    description: Option<String>,
    additional_data: Option<String>,
    amount: Option<Amount>,
    requested_amount: Option<Amount>,
    personal_data: Option<PersonalData>,
    raw: Value,
}

impl PaymentData {
    /// Decode a record from a JSON body.
    pub fn from_json(body: &str) -> TypesResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::try_from(value)
    }

    /// The raw record, keyed by provider field names.
    pub fn attributes(&self) -> &Value {
        &self.raw
    }

    /// Provider-assigned payment id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current status.
    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Check the status against a raw wire value.
    pub fn is_status(&self, status: &str) -> bool {
        self.status.as_str() == status
    }

    pub fn is_pre_start(&self) -> bool {
        self.status == PaymentStatus::PreStart
    }

    pub fn is_start(&self) -> bool {
        self.status == PaymentStatus::Start
    }

    pub fn is_abort(&self) -> bool {
        self.status == PaymentStatus::Abort
    }

    pub fn is_fraud(&self) -> bool {
        self.status == PaymentStatus::Fraud
    }

    pub fn is_positive_authorization(&self) -> bool {
        self.status == PaymentStatus::PositiveAuthorization
    }

    pub fn is_negative_authorization(&self) -> bool {
        self.status == PaymentStatus::NegativeAuthorization
    }

    pub fn is_positive_finish(&self) -> bool {
        self.status == PaymentStatus::PositiveFinish
    }

    pub fn is_negative_finish(&self) -> bool {
        self.status == PaymentStatus::NegativeFinish
    }

    pub fn is_time_exceeded(&self) -> bool {
        self.status == PaymentStatus::TimeExceeded
    }

    pub fn is_critical_error(&self) -> bool {
        self.status == PaymentStatus::CriticalError
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Payment channel chosen by the payer.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Free-form data passed at registration.
    pub fn additional_data(&self) -> Option<&str> {
        self.additional_data.as_deref()
    }

    /// Amount actually paid.
    pub fn amount(&self) -> Option<Decimal> {
        self.amount.as_ref().and_then(|a| a.value)
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.amount.as_ref().and_then(|a| a.currency_code.as_deref())
    }

    /// Amount requested at registration.
    pub fn requested_amount(&self) -> Option<Decimal> {
        self.requested_amount.as_ref().and_then(|a| a.value)
    }

    pub fn requested_currency_code(&self) -> Option<&str> {
        self.requested_amount
            .as_ref()
            .and_then(|a| a.currency_code.as_deref())
    }

    pub fn personal_data(&self) -> Option<&PersonalData> {
        self.personal_data.as_ref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.personal(|p| p.first_name.as_deref())
    }

    pub fn last_name(&self) -> Option<&str> {
        self.personal(|p| p.surname.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        self.personal(|p| p.email.as_deref())
    }

    pub fn country(&self) -> Option<&str> {
        self.personal(|p| p.country.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        self.personal(|p| p.city.as_deref())
    }

    pub fn postcode(&self) -> Option<&str> {
        self.personal(|p| p.postcode.as_deref())
    }

    pub fn street(&self) -> Option<&str> {
        self.personal(|p| p.street.as_deref())
    }

    pub fn house(&self) -> Option<&str> {
        self.personal(|p| p.house.as_deref())
    }

    pub fn flat(&self) -> Option<&str> {
        self.personal(|p| p.flat.as_deref())
    }

    fn personal<'a>(&'a self, field: impl FnOnce(&'a PersonalData) -> Option<&'a str>) -> Option<&'a str> {
        self.personal_data.as_ref().and_then(field)
    }
}

impl TryFrom<Value> for PaymentData {
    type Error = TypesError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let object = raw
            .as_object()
            .ok_or_else(|| TypesError::Decode("payment record is not a JSON object".into()))?;

        let id = match object.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => return Err(TypesError::MissingField("id")),
        };

        let status = object
            .get("status")
            .and_then(Value::as_str)
            .ok_or(TypesError::MissingField("status"))?
            .parse::<PaymentStatus>()?;

        // Past id and status, a field the provider sends in an unexpected
        // shape reads as absent rather than failing the whole record.
        Ok(Self {
            id,
            status,
            title: text(object, "title"),
            channel: text(object, "paymentChannel"),
            description: text(object, "description"),
            additional_data: text(object, "additionalData"),
            amount: object.get("amount").and_then(Amount::from_value),
            requested_amount: object.get("requestedAmount").and_then(Amount::from_value),
            personal_data: object.get("personalData").and_then(PersonalData::from_value),
            raw,
        })
    }
}

impl Serialize for PaymentData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
