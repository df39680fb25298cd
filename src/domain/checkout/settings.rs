//! Merchant-configured gateway settings.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::ValidationError;

use super::Credentials;

/// Options the merchant configures for the gateway.
///
/// Deserialized from the `gateway` configuration section. Missing options
/// fall back to the defaults the checkout shows out of the box.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    /// Whether the gateway is offered at checkout.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Title the shopper sees during checkout.
    #[serde(default = "default_title")]
    pub title: String,

    /// Description the shopper sees during checkout.
    #[serde(default = "default_description")]
    pub description: String,

    /// Provider account email.
    #[serde(default)]
    pub email: String,

    /// Provider access token.
    #[serde(default = "default_token")]
    pub token: SecretString,
}

impl GatewaySettings {
    /// Credentials built from the configured email and token.
    pub fn credentials(&self) -> Credentials {
        Credentials::from_secret(self.email.clone(), self.token.clone())
    }

    /// An enabled gateway needs usable credentials.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if !self.enabled {
            return Ok(());
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if self.token.expose_secret().trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(())
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            title: default_title(),
            description: default_description(),
            email: String::new(),
            token: default_token(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_title() -> String {
    "PagSeguro Payment".to_string()
}

fn default_description() -> String {
    "Pay securely using your credit card through PagSeguro.".to_string()
}

fn default_token() -> SecretString {
    SecretString::new(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GatewaySettings {
        GatewaySettings {
            email: "shop@example.com".to_string(),
            token: SecretString::new("tok123".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_checkout_copy() {
        let settings = GatewaySettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.title, "PagSeguro Payment");
        assert_eq!(
            settings.description,
            "Pay securely using your credit card through PagSeguro."
        );
        assert!(settings.email.is_empty());
    }

    #[test]
    fn enabled_gateway_requires_email() {
        let settings = GatewaySettings {
            email: String::new(),
            ..configured()
        };
        assert_eq!(settings.validate(), Err(ValidationError::empty_field("email")));
    }

    #[test]
    fn enabled_gateway_requires_token() {
        let settings = GatewaySettings {
            token: SecretString::new(" ".to_string()),
            ..configured()
        };
        assert_eq!(settings.validate(), Err(ValidationError::empty_field("token")));
    }

    #[test]
    fn disabled_gateway_may_omit_credentials() {
        let settings = GatewaySettings {
            enabled: false,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn credentials_carry_configured_values() {
        let credentials = configured().credentials();
        assert_eq!(credentials.email(), "shop@example.com");
        assert_eq!(credentials.token().expose_secret(), "tok123");
    }

    #[test]
    fn deserializes_with_defaults() {
        let settings: GatewaySettings =
            serde_json::from_str(r#"{"email":"shop@example.com","token":"tok123"}"#).unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.title, "PagSeguro Payment");
        assert!(settings.validate().is_ok());
    }
}
