//! PagSeguro client configuration

use serde::Deserialize;
use std::time::Duration;

use crate::adapters::pagseguro::{PagSeguroConfig, PagSeguroEnvironment};

use super::error::ValidationError;

/// PagSeguro API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Sandbox or production endpoints
    #[serde(default)]
    pub environment: PagSeguroEnvironment,

    /// Override for the API base URL
    #[serde(default)]
    pub ws_base_url: Option<String>,

    /// Override for the payment page base URL
    #[serde(default)]
    pub payment_base_url: Option<String>,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Hosting platform reported in the User-Agent
    #[serde(default = "default_platform_name")]
    pub platform_name: String,

    #[serde(default = "default_platform_release")]
    pub platform_release: String,

    /// Module reported in the User-Agent
    #[serde(default = "default_module_name")]
    pub module_name: String,

    #[serde(default = "default_module_release")]
    pub module_release: String,
}

impl ProviderConfig {
    pub fn is_production(&self) -> bool {
        self.environment == PagSeguroEnvironment::Production
    }

    /// Build the adapter configuration.
    pub fn to_client_config(&self) -> PagSeguroConfig {
        let mut config = PagSeguroConfig::new(self.environment)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_module_info(
                &self.platform_name,
                &self.platform_release,
                &self.module_name,
                &self.module_release,
            );
        if let Some(url) = &self.ws_base_url {
            config = config.with_ws_base_url(url.as_str());
        }
        if let Some(url) = &self.payment_base_url {
            config = config.with_payment_base_url(url.as_str());
        }
        config
    }

    /// Validate PagSeguro configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidProviderTimeout);
        }
        for url in [&self.ws_base_url, &self.payment_base_url].into_iter().flatten() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidProviderUrl(url.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            environment: PagSeguroEnvironment::default(),
            ws_base_url: None,
            payment_base_url: None,
            timeout_secs: default_timeout(),
            platform_name: default_platform_name(),
            platform_release: default_platform_release(),
            module_name: default_module_name(),
            module_release: default_module_release(),
        }
    }
}

fn default_timeout() -> u64 {
    20
}

fn default_platform_name() -> String {
    "WooCommerce".to_string()
}

fn default_platform_release() -> String {
    "unknown".to_string()
}

fn default_module_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_module_release() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_sandbox() {
        let config = ProviderConfig::default();
        assert_eq!(config.environment, PagSeguroEnvironment::Sandbox);
        assert_eq!(config.timeout_secs, 20);
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_config_carries_timeout_and_user_agent() {
        let config = ProviderConfig {
            timeout_secs: 5,
            platform_release: "8.5.2".to_string(),
            module_name: "pagseguro-gateway".to_string(),
            module_release: "1.0.0".to_string(),
            ..Default::default()
        };

        let client = config.to_client_config();

        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.user_agent(), "pagseguro-gateway/1.0.0 (WooCommerce/8.5.2)");
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = ProviderConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ProviderConfig {
            timeout_secs: 121,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_override_url() {
        let config = ProviderConfig {
            ws_base_url: Some("ws.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidProviderUrl(_))
        ));
    }
}
