#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";
/// WIB, the backend's home timezone.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Effective settings after merging the TOML file and command line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_seconds: Option<u64>,
    pub utc_offset_hours: i32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: None,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        validate_range("utc_offset_hours", self.utc_offset_hours, -12, 14)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url(), "http://localhost:8001");
        assert_eq!(config.utc_offset_hours(), 7);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = ClientConfig::default();
        config.timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.api_base_url = "localhost:8001".to_string();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.utc_offset_hours = 20;
        assert!(config.validate().is_err());
    }
}
