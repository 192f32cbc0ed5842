//! Client configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use cashbill_crypto::Token;
use cashbill_types::{Mode, Payment, DEFAULT_CURRENCY_CODE};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Environment variable overriding the endpoint mode.
pub const ENV_MODE: &str = "CASHBILL_MODE";
/// Environment variable overriding the shop id.
pub const ENV_SHOP_ID: &str = "CASHBILL_SHOP_ID";
/// Environment variable overriding the signing token.
pub const ENV_TOKEN: &str = "CASHBILL_TOKEN";
/// Environment variable overriding the default currency code.
pub const ENV_CURRENCY_CODE: &str = "CASHBILL_CURRENCY_CODE";

/// Default HTTP timeout for provider requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::CashBill`].
///
/// Read once at construction; the client never looks it up again.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CashBillConfig {
    /// Endpoint mode (`live` or `sandbox`).
    pub mode: Mode,
    /// Shop id from the provider panel.
    pub shop_id: String,
    /// Signing token from the provider panel. Wiped from memory on drop.
    pub token: Token,
    /// Attribute values applied to every payment that does not set them.
    pub payment_defaults: BTreeMap<String, String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CashBillConfig {
    fn default() -> Self {
        let mut payment_defaults = BTreeMap::new();
        payment_defaults.insert("currency_code".to_string(), DEFAULT_CURRENCY_CODE.to_string());

        Self {
            mode: Mode::Sandbox,
            shop_id: String::new(),
            token: Token::default(),
            payment_defaults,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CashBillConfig {
    /// Sandbox configuration for the given shop.
    pub fn sandbox(shop_id: &str, token: &str) -> Self {
        Self {
            shop_id: shop_id.to_string(),
            token: Token::new(token),
            ..Self::default()
        }
    }

    /// Live configuration for the given shop.
    pub fn live(shop_id: &str, token: &str) -> Self {
        Self {
            mode: Mode::Live,
            ..Self::sandbox(shop_id, token)
        }
    }

    /// Add or replace a payment default.
    pub fn with_payment_default(mut self, name: &str, value: &str) -> Self {
        self.payment_defaults
            .insert(name.to_string(), value.to_string());
        self
    }

    /// HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that payment defaults name real attributes with valid values.
    pub fn validate(&self) -> ClientResult<()> {
        let mut probe = Payment::new();
        probe
            .set_default_attributes(&self.payment_defaults)
            .map_err(|e| ClientError::config(format!("payment_defaults: {}", e)))?;
        if self.timeout_secs == 0 {
            return Err(ClientError::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Check that credentials needed for signed requests are present.
    pub fn require_credentials(&self) -> ClientResult<()> {
        if self.shop_id.trim().is_empty() {
            return Err(ClientError::config(format!(
                "shop id is empty. Set shop_id in the config or {}",
                ENV_SHOP_ID
            )));
        }
        if self.token.is_empty() {
            return Err(ClientError::config(format!(
                "token is empty. Set token in the config or {}",
                ENV_TOKEN
            )));
        }
        Ok(())
    }

    /// Apply `CASHBILL_*` environment variables on top of this configuration.
    pub fn apply_env_overrides(&mut self) -> ClientResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment, tests, ...).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ClientResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.parse()?;
        }
        if let Some(shop_id) = lookup(ENV_SHOP_ID) {
            self.shop_id = shop_id;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = Token::new(token);
        }
        if let Some(currency) = lookup(ENV_CURRENCY_CODE) {
            self.payment_defaults
                .insert("currency_code".to_string(), currency);
        }
        Ok(())
    }
}

impl std::fmt::Debug for CashBillConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashBillConfig")
            .field("mode", &self.mode)
            .field("shop_id", &self.shop_id)
            .field("token", &"[REDACTED]")
            .field("payment_defaults", &self.payment_defaults)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CashBillConfig::default();
        assert_eq!(config.mode, Mode::Sandbox);
        assert_eq!(
            config.payment_defaults.get("currency_code").map(String::as_str),
            Some("PLN")
        );
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_live_config() {
        let config = CashBillConfig::live("shop", "token");
        assert_eq!(config.mode, Mode::Live);
        assert_eq!(config.shop_id, "shop");
    }

    #[test]
    fn test_validate_unknown_default() {
        let config = CashBillConfig::default().with_payment_default("colour", "red");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_bad_currency_default() {
        let config = CashBillConfig::default().with_payment_default("currency_code", "zloty");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_require_credentials() {
        assert!(CashBillConfig::default().require_credentials().is_err());
        assert!(CashBillConfig::sandbox("shop", "").require_credentials().is_err());
        assert!(CashBillConfig::sandbox("shop", "t").require_credentials().is_ok());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_MODE, "live"),
            (ENV_SHOP_ID, "env-shop"),
            (ENV_TOKEN, "env-token"),
            (ENV_CURRENCY_CODE, "EUR"),
        ]
        .into_iter()
        .collect();

        let mut config = CashBillConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.mode, Mode::Live);
        assert_eq!(config.shop_id, "env-shop");
        assert_eq!(config.token.expose(), "env-token");
        assert_eq!(config.payment_defaults["currency_code"], "EUR");
    }

    #[test]
    fn test_overrides_bad_mode() {
        let mut config = CashBillConfig::default();
        let result = config.apply_overrides(|key| (key == ENV_MODE).then(|| "prod".to_string()));
        assert!(matches!(result, Err(ClientError::Types(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = CashBillConfig::sandbox("shop", "very-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("shop"));
    }

    #[test]
    fn test_token_loaded_from_config() {
        let config: CashBillConfig =
            serde_json::from_str(r#"{"shop_id":"s","token":"from-file"}"#).unwrap();
        assert_eq!(config.token.expose(), "from-file");
        assert!(config.require_credentials().is_ok());

        let saved = serde_json::to_value(&config).unwrap();
        assert_eq!(saved["token"], "from-file");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: CashBillConfig =
            serde_json::from_str(r#"{"mode":"live","shop_id":"s"}"#).unwrap();
        assert_eq!(config.mode, Mode::Live);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.payment_defaults.contains_key("currency_code"));
    }
}
