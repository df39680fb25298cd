//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAGSEGURO_GATEWAY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pagseguro_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod pagseguro;
mod server;

pub use error::{ConfigError, ValidationError};
pub use pagseguro::ProviderConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::domain::checkout::GatewaySettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Merchant settings of the PagSeguro gateway
    #[serde(default)]
    pub gateway: GatewaySettings,

    /// PagSeguro API client configuration
    #[serde(default)]
    pub pagseguro: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAGSEGURO_GATEWAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAGSEGURO_GATEWAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAGSEGURO_GATEWAY__GATEWAY__EMAIL=...` -> `gateway.email = ...`
    /// - `PAGSEGURO_GATEWAY__PAGSEGURO__ENVIRONMENT=production`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAGSEGURO_GATEWAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Besides per-section checks, the server request timeout must exceed the
    /// PagSeguro timeout, and a production deployment must talk to the
    /// PagSeguro production environment.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate()?;
        self.pagseguro.validate()?;
        if self.server.request_timeout_secs <= self.pagseguro.timeout_secs {
            return Err(ValidationError::RequestTimeoutNotAboveProvider {
                server: self.server.request_timeout_secs,
                provider: self.pagseguro.timeout_secs,
            });
        }
        if self.is_production() && !self.pagseguro.is_production() {
            return Err(ValidationError::ProductionRequiresLiveProvider);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
