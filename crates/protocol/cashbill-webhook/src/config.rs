//! Webhook server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{WebhookError, WebhookResult};

/// Default listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
/// Default notification route.
pub const DEFAULT_PATH: &str = "/webhook/cashbill";
/// Route answering liveness probes.
pub const HEALTH_PATH: &str = "/health";

/// Characters the router treats as captures or wildcards, or that cannot
/// appear in a request path.
const RESERVED_PATH_CHARS: &[char] = &['*', ':', '{', '}', '?', '#'];

/// Where and whether to serve the notification route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Serve the notification route.
    pub enabled: bool,
    /// Socket address to bind.
    pub listen: String,
    /// Path of the notification route.
    pub path: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            listen: DEFAULT_LISTEN.to_string(),
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl WebhookConfig {
    /// Parse the listen address.
    pub fn listen_addr(&self) -> WebhookResult<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| WebhookError::server(format!("invalid listen address '{}': {}", self.listen, e)))
    }

    /// Check that the route can be mounted.
    pub fn validate(&self) -> WebhookResult<()> {
        if !self.path.starts_with('/') {
            return Err(WebhookError::server(format!(
                "webhook path must start with '/': {}",
                self.path
            )));
        }
        let reserved = self
            .path
            .chars()
            .find(|c| RESERVED_PATH_CHARS.contains(c) || c.is_whitespace());
        if let Some(c) = reserved {
            return Err(WebhookError::server(format!(
                "webhook path must be a literal route, found '{}': {}",
                c, self.path
            )));
        }
        if self.path == HEALTH_PATH {
            return Err(WebhookError::server(format!(
                "webhook path conflicts with {}",
                HEALTH_PATH
            )));
        }
        self.listen_addr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebhookConfig::default();
        assert!(config.enabled);
        assert_eq!(config.path, "/webhook/cashbill");
        assert_eq!(config.listen_addr().unwrap().port(), 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_path() {
        let config = WebhookConfig {
            path: "webhook".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WebhookConfig {
            path: "/health".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pattern_paths_rejected() {
        for path in ["/hooks/*", "/hooks/*rest", "/hooks/:id", "/hooks/{id}", "/hooks?x=1", "/hook s"] {
            let config = WebhookConfig {
                path: path.into(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(WebhookError::Server(_))),
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_nested_literal_path_accepted() {
        let config = WebhookConfig {
            path: "/hooks/payments/cash-bill_v1".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_listen() {
        let config = WebhookConfig {
            listen: "localhost".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WebhookError::Server(_))));
    }
}
