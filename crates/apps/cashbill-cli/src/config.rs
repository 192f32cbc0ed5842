//! CLI configuration.

use cashbill_client::CashBillConfig;
use cashbill_webhook::WebhookConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Environment variable overriding the configuration directory.
pub const ENV_HOME: &str = "CASHBILL_HOME";

/// Expand environment variables in a string.
///
/// Supports `${VAR_NAME}` syntax. Unset variables are left as written.
pub fn expand_env_vars(input: &str) -> String {
    let Ok(re) = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}") else {
        return input.to_string();
    };
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Provider credentials and payment defaults.
    pub cashbill: CashBillConfig,
    /// Webhook server configuration.
    pub webhook: WebhookConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults. `${VAR}` references in
    /// credentials, payment defaults and the listen address are expanded,
    /// then `CASHBILL_*` environment variables are applied on top.
    pub fn load(path: &Path) -> CliResult<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.expand_env();
        config.cashbill.apply_env_overrides()?;
        config.cashbill.validate()?;

        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Output format used when `--format` is not given.
    pub fn default_format(&self) -> CliResult<OutputFormat> {
        self.display
            .default_format
            .parse()
            .map_err(|e: String| CliError::config(e))
    }

    fn expand_env(&mut self) {
        self.cashbill.shop_id = expand_env_vars(&self.cashbill.shop_id);
        self.cashbill.token = expand_env_vars(self.cashbill.token.expose()).into();
        for value in self.cashbill.payment_defaults.values_mut() {
            *value = expand_env_vars(value);
        }
        self.webhook.listen = expand_env_vars(&self.webhook.listen);
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default output format (`human` or `json`).
    pub default_format: String,
    /// Whether to colorize human output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_format: "human".to_string(),
            color: true,
        }
    }
}

/// Get the default base directory for cashbill configuration.
pub fn default_base_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_HOME) {
        return PathBuf::from(dir);
    }

    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cashbill")
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_base_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashbill_types::Mode;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.cashbill.mode, Mode::Sandbox);
        assert!(config.webhook.enabled);
        assert_eq!(config.webhook.listen, "127.0.0.1:8080");
        assert_eq!(config.webhook.path, "/webhook/cashbill");
        assert_eq!(config.default_format().unwrap(), OutputFormat::Human);
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("CASHBILL_TEST_EXPAND_TOKEN", "from-env");
        assert_eq!(
            expand_env_vars("${CASHBILL_TEST_EXPAND_TOKEN}"),
            "from-env"
        );
        assert_eq!(
            expand_env_vars("pre-${CASHBILL_TEST_EXPAND_TOKEN}-post"),
            "pre-from-env-post"
        );
        assert_eq!(
            expand_env_vars("${CASHBILL_TEST_UNSET_VARIABLE}"),
            "${CASHBILL_TEST_UNSET_VARIABLE}"
        );
        assert_eq!(expand_env_vars("plain"), "plain");
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = CliConfig::default();
        config.cashbill.shop_id = "shop.example.com".into();
        config.webhook.path = "/hooks/cashbill".into();
        config.save(&config_path).unwrap();

        let loaded = CliConfig::load(&config_path).unwrap();
        assert_eq!(loaded.webhook.path, "/hooks/cashbill");
        assert_eq!(
            loaded.cashbill.payment_defaults.get("currency_code"),
            config.cashbill.payment_defaults.get("currency_code")
        );
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[cashbill]\nmode = \"live\"\n\n[webhook]\nenabled = false\n",
        )
        .unwrap();

        let config: CliConfig =
            toml::from_str(&std::fs::read_to_string(&config_path).unwrap()).unwrap();
        assert_eq!(config.cashbill.mode, Mode::Live);
        assert!(!config.webhook.enabled);
        assert_eq!(config.webhook.path, "/webhook/cashbill");
        assert_eq!(config.display.default_format, "human");
    }

    #[test]
    fn test_toml_mode_is_case_insensitive() {
        let config: CliConfig = toml::from_str("[cashbill]\nmode = \"Live\"\n").unwrap();
        assert_eq!(config.cashbill.mode, Mode::Live);

        assert!(toml::from_str::<CliConfig>("[cashbill]\nmode = \"prod\"\n").is_err());
    }

    #[test]
    fn test_load_rejects_unknown_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[cashbill.payment_defaults]\ncolour = \"red\"\n",
        )
        .unwrap();

        assert!(CliConfig::load(&config_path).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = CliConfig::load(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.webhook.enabled);
    }

    #[test]
    fn test_invalid_default_format() {
        let mut config = CliConfig::default();
        config.display.default_format = "yaml".into();
        assert!(matches!(config.default_format(), Err(CliError::Config(_))));
    }
}
