//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the gateways held by the registry.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::GatewayRegistry;
use crate::domain::checkout::{FailureKind, OrderSnapshot, PaymentOutcome};

use super::dto::{ErrorResponse, GatewaySummaryResponse, PaymentResultResponse, SubmitPaymentRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for checkout endpoints.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub registry: Arc<GatewayRegistry>,
}

impl CheckoutAppState {
    pub fn new(registry: Arc<GatewayRegistry>) -> Self {
        Self { registry }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/gateways - Enabled gateways for the checkout page
pub async fn list_gateways(State(state): State<CheckoutAppState>) -> impl IntoResponse {
    let gateways: Vec<GatewaySummaryResponse> = state
        .registry
        .available()
        .into_iter()
        .map(GatewaySummaryResponse::from)
        .collect();
    Json(gateways)
}

/// POST /api/gateways/:id/payments - Pay for an order
///
/// A body that does not deserialize into an order is reported as a
/// validation failure, like any other invalid order.
pub async fn submit_payment(
    State(state): State<CheckoutAppState>,
    Path(gateway_id): Path<String>,
    body: Result<Json<SubmitPaymentRequest>, JsonRejection>,
) -> Result<Response, CheckoutApiError> {
    let gateway = state
        .registry
        .get(&gateway_id)
        .ok_or_else(|| CheckoutApiError::GatewayNotFound(gateway_id.clone()))?;

    let outcome = match body {
        Ok(Json(request)) => {
            let order = OrderSnapshot::from(request);
            gateway.process_payment(&order).await
        }
        Err(rejection) => {
            tracing::warn!(
                gateway = %gateway_id,
                error = %rejection.body_text(),
                "Unreadable order body"
            );
            PaymentOutcome::failure(
                FailureKind::Validation,
                format!("invalid order: {}", rejection.body_text()),
            )
        }
    };

    Ok(outcome_response(outcome))
}

fn outcome_response(outcome: PaymentOutcome) -> Response {
    let status = match outcome.failure_reason() {
        None => StatusCode::OK,
        Some(reason) => status_for(reason.kind),
    };
    (status, Json(PaymentResultResponse::from(outcome))).into_response()
}

fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::Transport => StatusCode::BAD_GATEWAY,
        FailureKind::ProviderRejection => StatusCode::PAYMENT_REQUIRED,
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Errors raised before a gateway is reached.
#[derive(Debug)]
pub enum CheckoutApiError {
    GatewayNotFound(String),
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> Response {
        match self {
            CheckoutApiError::GatewayNotFound(id) => {
                let error = ErrorResponse::new(
                    "GATEWAY_NOT_FOUND",
                    format!("Gateway '{}' is not registered", id),
                );
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            }
        }
    }
}
