//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::auth::DEFAULT_REFRESH_MARGIN_MS;
use crate::core::errors::{Result, TranslationError};

const DEFAULT_AUTH_URL: &str = "https://edge.microsoft.com/translate/auth";
const DEFAULT_TRANSLATE_URL: &str = "https://api.cognitive.microsofttranslator.com/translate";
const DEFAULT_LANGUAGES_URL: &str = "https://api.cognitive.microsofttranslator.com/languages";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";

/// API version sent with every translate and languages request
pub const API_VERSION: &str = "3.0";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Endpoint issuing bearer credentials
    pub auth_url: String,
    /// Translate endpoint
    pub translate_url: String,
    /// Supported-languages endpoint
    pub languages_url: String,
    /// Default `User-Agent` for every outgoing request
    pub user_agent: String,
    /// Client-wide request timeout
    pub timeout_ms: u64,
    /// Tokens closer than this to expiry are refreshed
    pub token_refresh_margin_ms: i64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            languages_url: DEFAULT_LANGUAGES_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: 30000,
            token_refresh_margin_ms: DEFAULT_REFRESH_MARGIN_MS,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| defaults.timeout_ms.to_string())
            .parse::<u64>()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("REQUEST_TIMEOUT_MS: {}", e),
            })?;

        let token_refresh_margin_ms = std::env::var("TOKEN_REFRESH_MARGIN_MS")
            .unwrap_or_else(|_| defaults.token_refresh_margin_ms.to_string())
            .parse::<i64>()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("TOKEN_REFRESH_MARGIN_MS: {}", e),
            })?;

        Ok(Self {
            auth_url: std::env::var("TRANSLATOR_AUTH_URL").unwrap_or(defaults.auth_url),
            translate_url: std::env::var("TRANSLATOR_API_URL").unwrap_or(defaults.translate_url),
            languages_url: std::env::var("TRANSLATOR_LANGUAGES_URL")
                .unwrap_or(defaults.languages_url),
            user_agent: std::env::var("TRANSLATOR_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_ms,
            token_refresh_margin_ms,
        })
    }

    /// Load from a JSON or YAML file, picked by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("auth_url", &self.auth_url),
            ("translate_url", &self.translate_url),
            ("languages_url", &self.languages_url),
        ] {
            if url.is_empty() {
                return Err(TranslationError::ConfigError {
                    message: format!("{} is required", name),
                });
            }
            reqwest::Url::parse(url).map_err(|e| TranslationError::ConfigError {
                message: format!("{} is not a valid URL: {}", name, e),
            })?;
        }

        if self.user_agent.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "user_agent is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.token_refresh_margin_ms < 0 {
            return Err(TranslationError::ConfigError {
                message: "token_refresh_margin_ms must not be negative".to_string(),
            });
        }

        if self.token_refresh_margin_ms == 0 {
            warn!("Token refresh margin is 0, tokens may expire in flight");
        }

        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        tokio_test::assert_ok!(TranslatorConfig::default().validate());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let config = TranslatorConfig {
            translate_url: "not a url".to_string(),
            ..Default::default()
        };
        tokio_test::assert_err!(config.validate());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = TranslatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_negative_margin() {
        let config = TranslatorConfig {
            token_refresh_margin_ms: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let config = TranslatorConfig {
            user_agent: "test-agent".to_string(),
            timeout_ms: 5000,
            ..Default::default()
        };

        for name in ["config.json", "config.yaml"] {
            let path = dir.path().join(name);
            config.to_file(&path).unwrap();
            assert_eq!(TranslatorConfig::from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.yml");
        std::fs::write(&path, "timeout_ms: 1234\n").unwrap();

        let config = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(config.timeout_ms, 1234);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("TRANSLATOR_API_URL", "http://localhost:9/translate");
        std::env::set_var("REQUEST_TIMEOUT_MS", "250");
        let config = TranslatorConfig::from_env().unwrap();
        std::env::remove_var("TRANSLATOR_API_URL");
        std::env::remove_var("REQUEST_TIMEOUT_MS");

        assert_eq!(config.translate_url, "http://localhost:9/translate");
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.languages_url, DEFAULT_LANGUAGES_URL);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_number() {
        std::env::set_var("TOKEN_REFRESH_MARGIN_MS", "soon");
        let result = TranslatorConfig::from_env();
        std::env::remove_var("TOKEN_REFRESH_MARGIN_MS");

        assert!(matches!(result, Err(TranslationError::ConfigError { .. })));
    }
}
