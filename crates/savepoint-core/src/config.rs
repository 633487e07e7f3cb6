//! Client bootstrap configuration.
//!
//! Only safe-to-ship public endpoints live here. Bearer tokens come from
//! the session collaborator and are never stored in configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::{is_http_url, normalize_text_option};

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "SAVEPOINT_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SAVEPOINT_API_URL is not set and no api_base_url was provided")]
    MissingApiUrl,
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Build-provisioned client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    /// Resolve configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base_url: normalize_text_option(std::env::var(API_URL_ENV).ok()),
        }
    }

    /// Validated API base URL, ready for `ClipApiClient::new`.
    pub fn api_base_url(&self) -> Result<String, ConfigError> {
        let url = normalize_text_option(self.api_base_url.clone())
            .ok_or(ConfigError::MissingApiUrl)?;
        if !is_http_url(&url) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https://, got {url}"
            )));
        }
        Ok(url.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_base_url_normalizes_and_validates() {
        let config = ClientConfig {
            api_base_url: Some(" https://api.savepoint.dev/ ".to_string()),
        };
        assert_eq!(config.api_base_url().unwrap(), "https://api.savepoint.dev");
    }

    #[test]
    fn api_base_url_requires_http_scheme() {
        let config = ClientConfig {
            api_base_url: Some("api.savepoint.dev".to_string()),
        };
        assert!(matches!(config.api_base_url(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_url_is_its_own_error() {
        let config = ClientConfig::default();
        assert!(matches!(
            config.api_base_url(),
            Err(ConfigError::MissingApiUrl)
        ));
    }

    #[test]
    fn rejects_unknown_config_fields() {
        let parsed: Result<ClientConfig, _> =
            serde_json::from_str(r#"{"api_base_url": "https://x", "token": "nope"}"#);
        assert!(parsed.is_err());
    }
}
