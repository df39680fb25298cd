//! PagSeguro payment provider adapter.
//!
//! Implements the `PaymentProvider` trait for the PagSeguro v2 checkout API.
//! A registration is a single form-encoded `POST /v2/checkout` authenticated
//! by the account email and token in the query string. PagSeguro answers
//! with an XML checkout code, which becomes the hosted payment page URL.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PagSeguroConfig::new(PagSeguroEnvironment::Sandbox)
//!     .with_timeout(Duration::from_secs(20));
//! let adapter = PagSeguroPaymentAdapter::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::domain::checkout::Credentials;
use crate::ports::{
    PaymentError, PaymentErrorCode, PaymentProvider, PaymentRedirect, PaymentRegistration,
};

use super::wire_types::{CheckoutResponse, ErrorsResponse};

/// Default per-request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Longest item description PagSeguro accepts.
const MAX_DESCRIPTION_CHARS: usize = 100;

/// Longest response excerpt carried in error messages.
const MAX_BODY_EXCERPT_CHARS: usize = 200;

/// PagSeguro environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagSeguroEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl PagSeguroEnvironment {
    /// Base URL of the web service API.
    pub fn ws_base_url(&self) -> &'static str {
        match self {
            PagSeguroEnvironment::Sandbox => "https://ws.sandbox.pagseguro.uol.com.br",
            PagSeguroEnvironment::Production => "https://ws.pagseguro.uol.com.br",
        }
    }

    /// Base URL of the shopper-facing payment pages.
    pub fn payment_base_url(&self) -> &'static str {
        match self {
            PagSeguroEnvironment::Sandbox => "https://sandbox.pagseguro.uol.com.br",
            PagSeguroEnvironment::Production => "https://pagseguro.uol.com.br",
        }
    }
}

/// PagSeguro API configuration.
#[derive(Debug, Clone)]
pub struct PagSeguroConfig {
    /// Base URL for API calls.
    ws_base_url: String,

    /// Base URL for the hosted payment page.
    payment_base_url: String,

    /// Per-request timeout.
    timeout: Duration,

    /// Identifies the platform and module to PagSeguro.
    user_agent: String,
}

impl PagSeguroConfig {
    /// Create a configuration for the given environment.
    pub fn new(environment: PagSeguroEnvironment) -> Self {
        Self {
            ws_base_url: environment.ws_base_url().to_string(),
            payment_base_url: environment.payment_base_url().to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_ws_base_url(mut self, url: impl Into<String>) -> Self {
        self.ws_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom payment page base URL.
    pub fn with_payment_base_url(mut self, url: impl Into<String>) -> Self {
        self.payment_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Report the hosting platform and module in the `User-Agent` header.
    pub fn with_module_info(
        mut self,
        platform_name: &str,
        platform_release: &str,
        module_name: &str,
        module_release: &str,
    ) -> Self {
        self.user_agent = format!(
            "{}/{} ({}/{})",
            module_name, module_release, platform_name, platform_release
        );
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn checkout_url(&self) -> String {
        format!("{}/v2/checkout", self.ws_base_url)
    }

    fn redirect_url(&self, code: &str) -> String {
        format!(
            "{}/v2/checkout/payment.html?code={}",
            self.payment_base_url, code
        )
    }
}

/// PagSeguro payment provider adapter.
pub struct PagSeguroPaymentAdapter {
    config: PagSeguroConfig,
    http_client: reqwest::Client,
}

impl PagSeguroPaymentAdapter {
    /// Create a new PagSeguro adapter with the given configuration.
    pub fn new(config: PagSeguroConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Form fields of a registration request, items numbered from 1.
    fn form_params(request: &PaymentRegistration) -> Vec<(String, String)> {
        let mut params = vec![
            ("currency".to_string(), request.currency.code().to_string()),
            ("reference".to_string(), request.reference.clone()),
        ];

        for (index, item) in request.items.iter().enumerate() {
            let n = index + 1;
            params.push((format!("itemId{}", n), item.id.clone()));
            params.push((
                format!("itemDescription{}", n),
                item.description.chars().take(MAX_DESCRIPTION_CHARS).collect(),
            ));
            params.push((format!("itemQuantity{}", n), item.quantity.to_string()));
            params.push((format!("itemAmount{}", n), format!("{:.2}", item.amount)));
        }

        if let Some(name) = &request.sender_name {
            params.push(("senderName".to_string(), name.clone()));
        }
        if let Some(email) = &request.sender_email {
            params.push(("senderEmail".to_string(), email.clone()));
        }

        params
    }

    /// Convert a transport failure, dropping the URL (it carries the token).
    fn transport_error(&self, err: reqwest::Error) -> PaymentError {
        if err.is_timeout() {
            PaymentError::timeout(format!(
                "PagSeguro did not answer within {}s",
                self.config.timeout.as_secs_f64()
            ))
        } else {
            PaymentError::network(format!(
                "Could not reach PagSeguro: {}",
                err.without_url()
            ))
        }
    }

    /// Interpret a 2xx body.
    fn parse_checkout(&self, body: &str) -> Result<PaymentRedirect, PaymentError> {
        let checkout = CheckoutResponse::from_xml(body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse PagSeguro checkout response");
            PaymentError::malformed(format!("Invalid PagSeguro checkout response: {}", e))
        })?;

        let code = checkout.code.trim();
        if code.is_empty() {
            return Err(PaymentError::malformed(
                "PagSeguro checkout response has no code",
            ));
        }

        let registered_at = checkout.date.as_deref().and_then(|date| {
            DateTime::parse_from_rfc3339(date.trim())
                .map_err(|e| tracing::debug!(error = %e, date, "Unparseable checkout date"))
                .ok()
        });

        Ok(PaymentRedirect {
            code: code.to_string(),
            redirect_url: self.config.redirect_url(code),
            registered_at,
        })
    }

    /// Interpret a non-2xx response.
    fn parse_failure(status: StatusCode, body: &str) -> PaymentError {
        let excerpt: String = body.chars().take(MAX_BODY_EXCERPT_CHARS).collect();

        match status {
            StatusCode::UNAUTHORIZED => {
                PaymentError::authentication("PagSeguro rejected the account email or token")
            }
            StatusCode::TOO_MANY_REQUESTS => PaymentError::new(
                PaymentErrorCode::RateLimitExceeded,
                "PagSeguro rate limit exceeded",
            ),
            StatusCode::BAD_REQUEST => match ErrorsResponse::from_xml(body) {
                Ok(errors) if !errors.errors.is_empty() => {
                    let error = PaymentError::rejected(errors.summary());
                    match errors.errors.first() {
                        Some(first) => error.with_provider_code(first.code.clone()),
                        None => error,
                    }
                }
                _ => PaymentError::rejected(format!(
                    "PagSeguro returned HTTP 400: {}",
                    excerpt
                )),
            },
            other => PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("PagSeguro returned HTTP {}: {}", other.as_u16(), excerpt),
            ),
        }
    }
}

#[async_trait]
impl PaymentProvider for PagSeguroPaymentAdapter {
    fn name(&self) -> &'static str {
        "pagseguro"
    }

    async fn register_payment(
        &self,
        request: PaymentRegistration,
        credentials: &Credentials,
    ) -> Result<PaymentRedirect, PaymentError> {
        let params = Self::form_params(&request);

        let response = self
            .http_client
            .post(self.config.checkout_url())
            .query(&[
                ("email", credentials.email()),
                ("token", credentials.token().expose_secret().as_str()),
            ])
            .header(USER_AGENT, self.config.user_agent.as_str())
            .timeout(self.config.timeout)
            .form(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let error = Self::parse_failure(status, &body);
            tracing::error!(
                reference = %request.reference,
                status = status.as_u16(),
                error = %error,
                "PagSeguro checkout registration failed"
            );
            return Err(error);
        }

        let redirect = self.parse_checkout(&body)?;
        tracing::debug!(
            reference = %request.reference,
            checkout_code = %redirect.code,
            "PagSeguro checkout registered"
        );
        Ok(redirect)
    }
}
