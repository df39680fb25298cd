//! Provider account credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::ValidationError;

/// Account identifier and access token for the payment provider.
///
/// Held only for the duration of a submission. The token stays wrapped in
/// a [`SecretString`] so it never shows up in `Debug` output.
#[derive(Clone, Debug)]
pub struct Credentials {
    email: String,
    token: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: SecretString::new(token.into()),
        }
    }

    pub fn from_secret(email: impl Into<String>, token: SecretString) -> Self {
        Self {
            email: email.into(),
            token,
        }
    }

    /// Account email (the provider's account identifier).
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Access token. Only adapters building the outbound request should call this.
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Both fields must be non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("credentials.email"));
        }
        if self.token.expose_secret().trim().is_empty() {
            return Err(ValidationError::empty_field("credentials.token"));
        }
        Ok(())
    }
}
