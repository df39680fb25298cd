//! HTTP DTOs (Data Transfer Objects) for checkout endpoints.
//!
//! These types define the JSON request/response structure for the checkout API.
//! They serve as the boundary between HTTP and the application layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::{Buyer, FailureKind, LineItem, OrderSnapshot, PaymentOutcome};
use crate::ports::GatewayDescriptor;

/// Prefix of every failure message shown to the shopper.
const PAYMENT_ERROR_PREFIX: &str = "Payment error: ";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Host identifiers arrive either as JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for IdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdValue::Number(n) => write!(f, "{}", n),
            IdValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Request to pay for an order through a gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitPaymentRequest {
    pub order_id: IdValue,
    pub currency: String,
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
    #[serde(default)]
    pub buyer: BuyerRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItemRequest {
    pub id: IdValue,
    pub name: String,
    pub quantity: u32,
    /// Accepts `"10.00"` or `10.00`.
    pub unit_price: Decimal,
}

/// Billing identity. Either `name` or `first_name`/`last_name` may be sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuyerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<BuyerRequest> for Buyer {
    fn from(buyer: BuyerRequest) -> Self {
        let email = buyer.email.unwrap_or_default();
        match buyer.name {
            Some(name) if !name.trim().is_empty() => Buyer::new(name.trim(), email),
            _ => Buyer::from_parts(
                buyer.first_name.as_deref().unwrap_or(""),
                buyer.last_name.as_deref().unwrap_or(""),
                email,
            ),
        }
    }
}

impl From<SubmitPaymentRequest> for OrderSnapshot {
    fn from(request: SubmitPaymentRequest) -> Self {
        OrderSnapshot {
            id: request.order_id.to_string(),
            currency: request.currency,
            items: request
                .items
                .into_iter()
                .map(|item| LineItem::new(item.id.to_string(), item.name, item.quantity, item.unit_price))
                .collect(),
            buyer: request.buyer.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Gateway entry shown on the checkout page.
#[derive(Debug, Clone, Serialize)]
pub struct GatewaySummaryResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub has_fields: bool,
}

impl From<GatewayDescriptor> for GatewaySummaryResponse {
    fn from(descriptor: GatewayDescriptor) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title,
            description: descriptor.description,
            has_fields: descriptor.has_fields,
        }
    }
}

/// Outcome of a payment submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PaymentResultResponse {
    Success { redirect: String },
    Failure { kind: FailureKind, message: String },
}

impl From<PaymentOutcome> for PaymentResultResponse {
    fn from(outcome: PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Success { redirect_url } => PaymentResultResponse::Success {
                redirect: redirect_url,
            },
            PaymentOutcome::Failure { reason } => PaymentResultResponse::Failure {
                kind: reason.kind,
                message: format!("{}{}", PAYMENT_ERROR_PREFIX, reason.message),
            },
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
