//! Configuration management for the Freljord client.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the Riot API key.
pub const ENV_API_KEY: &str = "RIOT_API_KEY";
/// Environment variable holding the platform region.
pub const ENV_REGION: &str = "RIOT_REGION";

/// Client configuration.
///
/// Every field has a default, so a config file or environment only needs to
/// supply what it overrides. The builder on [`crate::Client`] applies any
/// further programmatic overrides on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Riot API key, sent as the `X-Riot-Token` header
    #[serde(default)]
    pub api_key: String,

    /// Platform region the client talks to (e.g. `na1`, `euw1`)
    #[serde(default = "default_region")]
    pub region: String,

    /// Full base URL override. When set, `region` is ignored. Must end with
    /// a trailing slash so relative endpoint paths resolve under it.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds; `None` leaves requests unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: default_region(),
            base_url: None,
            timeout_secs: None,
        }
    }
}

fn default_region() -> String {
    "na1".to_string()
}

impl ClientConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build configuration from the `RIOT_API_KEY` / `RIOT_REGION`
    /// environment variables, with defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            config.api_key = api_key;
        }
        if let Ok(region) = std::env::var(ENV_REGION) {
            config.region = region;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();

        assert_eq!(config.region, "na1");
        assert!(config.api_key.is_empty());
        assert!(config.base_url.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
api_key: RGAPI-test-key
region: euw1
timeout_secs: 10
"#;
        let config: ClientConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.api_key, "RGAPI-test-key");
        assert_eq!(config.region, "euw1");
        assert_eq!(config.timeout_secs, Some(10));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_parse_yaml_partial_fields_use_defaults() {
        let config: ClientConfig = serde_yaml::from_str("api_key: RGAPI-key").unwrap();

        assert_eq!(config.api_key, "RGAPI-key");
        assert_eq!(config.region, "na1");
    }
}
