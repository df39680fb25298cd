//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError as SettingsError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address '{0}'")]
    InvalidSocketAddr(String),

    #[error("Invalid log format '{0}' (expected 'text' or 'json')")]
    InvalidLogFormat(String),

    #[error("PagSeguro timeout must be between 1 and 120 seconds")]
    InvalidProviderTimeout,

    #[error("Invalid PagSeguro base URL '{0}'")]
    InvalidProviderUrl(String),

    #[error("Request timeout ({server}s) must exceed the PagSeguro timeout ({provider}s)")]
    RequestTimeoutNotAboveProvider { server: u64, provider: u64 },

    #[error("Production requires the PagSeguro production environment")]
    ProductionRequiresLiveProvider,

    #[error("Invalid gateway settings: {0}")]
    Gateway(#[from] SettingsError),
}
