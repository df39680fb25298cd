//! Payment provider port for remote payment registration.
//!
//! Defines the contract for provider integrations (e.g., PagSeguro).
//! Implementations register one payment per call and hand back the URL of
//! the provider-hosted payment page.
//!
//! # Design
//!
//! - **Provider agnostic**: request and response shapes are internal, the
//!   wire format is owned by each adapter
//! - **Single shot**: one outbound call per registration, no retries

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::{Credentials, Currency, FailureKind, ValidatedOrder};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Register a payment under the given account credentials.
    ///
    /// Returns the provider's checkout code and the redirect URL for the
    /// shopper.
    async fn register_payment(
        &self,
        request: PaymentRegistration,
        credentials: &Credentials,
    ) -> Result<PaymentRedirect, PaymentError>;
}

/// Provider-neutral payment registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRegistration {
    /// Host order identifier, correlates the provider record with the order.
    pub reference: String,

    /// Settlement currency.
    pub currency: Currency,

    /// Items in order.
    pub items: Vec<RegistrationItem>,

    /// Buyer full name, if known.
    pub sender_name: Option<String>,

    /// Buyer email, if known.
    pub sender_email: Option<String>,
}

/// One item of a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub amount: Decimal,
}

impl From<ValidatedOrder> for PaymentRegistration {
    fn from(order: ValidatedOrder) -> Self {
        Self {
            reference: order.reference,
            currency: order.currency,
            items: order
                .items
                .into_iter()
                .map(|item| RegistrationItem {
                    id: item.id,
                    description: item.name,
                    quantity: item.quantity,
                    amount: item.unit_price,
                })
                .collect(),
            sender_name: order.buyer_name,
            sender_email: order.buyer_email,
        }
    }
}

/// Provider acknowledgement of a registered payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRedirect {
    /// Provider's checkout code.
    pub code: String,

    /// URL the shopper is sent to.
    pub redirect_url: String,

    /// When the provider registered the payment, if reported.
    pub registered_at: Option<DateTime<FixedOffset>>,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Timeout, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationError, message)
    }

    /// Create a rejection carrying the provider's explanation.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Rejected, message)
    }

    /// Create a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::MalformedResponse, message)
    }

    /// Which outcome failure this error surfaces as.
    pub fn failure_kind(&self) -> FailureKind {
        self.code.failure_kind()
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// Provider did not answer in time.
    Timeout,

    /// Account email/token rejected.
    AuthenticationError,

    /// Provider refused the request with a structured error.
    Rejected,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider answered but the body could not be understood.
    MalformedResponse,

    /// Unexpected provider status.
    ProviderError,
}

impl PaymentErrorCode {
    /// Map to the outcome taxonomy shown to the host.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            PaymentErrorCode::NetworkError | PaymentErrorCode::Timeout => FailureKind::Transport,
            PaymentErrorCode::AuthenticationError
            | PaymentErrorCode::Rejected
            | PaymentErrorCode::RateLimitExceeded
            | PaymentErrorCode::MalformedResponse
            | PaymentErrorCode::ProviderError => FailureKind::ProviderRejection,
        }
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::Timeout => "timeout",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::Rejected => "rejected",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::MalformedResponse => "malformed_response",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
