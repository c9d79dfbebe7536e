use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "CMC_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub screener: ScreenerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// CoinMarketCap Pro API key (or set CMC_API_KEY)
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Listings page size requested from the API
    pub listing_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Tokens included in the final report
    pub report_top_count: usize,
    /// Quote currency for all thresholds and output
    pub convert: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                api_key: String::new(),
                base_url: "https://pro-api.coinmarketcap.com/v1".to_string(),
                timeout_secs: 20,
                listing_limit: 5000,
            },
            screener: ScreenerConfig {
                report_top_count: 10,
                convert: "USD".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            let default_config = Self::default();
            default_config.save(path)?;
            // Keep going: the env var may carry the key
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api.api_key = key.trim().to_string();
            }
        }

        config.validate()?;

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "api.api_key is required (set it in the config file or via {})",
                API_KEY_ENV
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api.base_url is required"));
        }
        if self.api.listing_limit == 0 {
            return Err(anyhow::anyhow!("api.listing_limit must be positive"));
        }
        if self.screener.report_top_count == 0 {
            return Err(anyhow::anyhow!("screener.report_top_count must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let config = Config::default();
        assert_eq!(config.api.listing_limit, 5000);
        assert_eq!(config.screener.report_top_count, 10);
        assert_eq!(config.screener.convert, "USD");
        // Default has no key, so validation must fail
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.api.api_key = "test-key".to_string();
        config.api.listing_limit = 500;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api.api_key, "test-key");
        assert_eq!(parsed.api.listing_limit, 500);
        assert!(parsed.validate().is_ok());
    }
}
