//! Enumeration types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{ENDPOINT_LIVE, ENDPOINT_SANDBOX};
use crate::error::TypesError;

/// Which provider environment requests are sent to.
///
/// Deserializes through [`FromStr`](std::str::FromStr), so configuration
/// files and environment variables accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Real payments.
    Live,
    /// Test payments.
    #[default]
    Sandbox,
}

impl Mode {
    /// Base URL of the REST API for this mode.
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Self::Live => ENDPOINT_LIVE,
            Self::Sandbox => ENDPOINT_SANDBOX,
        }
    }

    /// Lowercase name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Sandbox => "sandbox",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "sandbox" | "" => Ok(Self::Sandbox),
            _ => Err(TypesError::UnknownMode(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Languages supported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Polish.
    #[default]
    Pl,
    /// English.
    En,
}

impl Language {
    /// Two-letter code used in URIs and the `languageCode` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pl => "pl",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" => Ok(Self::Pl),
            "en" => Ok(Self::En),
            _ => Err(TypesError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Kind of notification the provider sends to the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationCommand {
    /// A payment moved to a new status.
    #[serde(rename = "transactionStatusChanged")]
    TransactionStatusChanged,
    /// Payer verification completed.
    #[serde(rename = "verificationFinished")]
    VerificationFinished,
}

impl NotificationCommand {
    /// Every supported command.
    pub const ALL: [NotificationCommand; 2] =
        [Self::TransactionStatusChanged, Self::VerificationFinished];

    /// Wire value of the `cmd` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransactionStatusChanged => "transactionStatusChanged",
            Self::VerificationFinished => "verificationFinished",
        }
    }
}

impl std::fmt::Display for NotificationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationCommand {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| TypesError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_endpoint() {
        assert_eq!(Mode::Live.endpoint_url(), ENDPOINT_LIVE);
        assert_eq!(Mode::Sandbox.endpoint_url(), ENDPOINT_SANDBOX);
        assert_eq!(Mode::default(), Mode::Sandbox);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("live".parse::<Mode>().unwrap(), Mode::Live);
        assert_eq!("LIVE".parse::<Mode>().unwrap(), Mode::Live);
        assert_eq!("sandbox".parse::<Mode>().unwrap(), Mode::Sandbox);
        assert_eq!("".parse::<Mode>().unwrap(), Mode::Sandbox);
        assert!(matches!(
            "production".parse::<Mode>(),
            Err(TypesError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&Mode::Live).unwrap();
        assert_eq!(json, "\"live\"");
        let mode: Mode = serde_json::from_str("\"sandbox\"").unwrap();
        assert_eq!(mode, Mode::Sandbox);
    }

    #[test]
    fn test_mode_deserialize_matches_from_str() {
        for raw in ["live", "Live", "LIVE", " live ", "sandbox", "Sandbox", ""] {
            let json = serde_json::to_string(raw).unwrap();
            let decoded: Mode = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, raw.parse::<Mode>().unwrap(), "{:?}", raw);
        }

        let err = serde_json::from_str::<Mode>("\"production\"").unwrap_err();
        assert!(err.to_string().contains("production"));
    }

    #[test]
    fn test_language() {
        assert_eq!(Language::default().as_str(), "pl");
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_command_roundtrip() {
        for cmd in NotificationCommand::ALL {
            assert_eq!(cmd.as_str().parse::<NotificationCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn test_command_is_case_sensitive() {
        assert!(matches!(
            "TransactionStatusChanged".parse::<NotificationCommand>(),
            Err(TypesError::UnknownCommand(_))
        ));
    }
}
