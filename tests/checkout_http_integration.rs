//! Integration tests for checkout HTTP endpoints.
//!
//! These tests drive the full router with a mock payment provider:
//! 1. Gateway listing reflects the registry
//! 2. Payment submissions map outcomes to status codes and JSON bodies
//! 3. Unknown gateways are reported as 404

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use pagseguro_gateway::adapters::http::{checkout_router, CheckoutAppState};
use pagseguro_gateway::adapters::MockPaymentProvider;
use pagseguro_gateway::application::{GatewayRegistry, PaymentGatewayAdapter};
use pagseguro_gateway::domain::checkout::GatewaySettings;
use pagseguro_gateway::ports::PaymentError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn settings(enabled: bool) -> GatewaySettings {
    GatewaySettings {
        enabled,
        email: "shop@example.com".to_string(),
        token: SecretString::new("tok123".to_string()),
        ..Default::default()
    }
}

fn app_with(mock: &MockPaymentProvider, enabled: bool) -> Router {
    let gateway = PaymentGatewayAdapter::new(Arc::new(mock.clone()), settings(enabled)).unwrap();
    let registry = GatewayRegistry::new().with_gateway(Arc::new(gateway)).unwrap();

    Router::new()
        .nest("/api", checkout_router())
        .with_state(CheckoutAppState::new(Arc::new(registry)))
}

fn widget_order() -> Value {
    json!({
        "order_id": 42,
        "currency": "BRL",
        "items": [{"id": 1, "name": "Widget", "quantity": 2, "unit_price": "10.00"}],
        "buyer": {"name": "Ana Silva", "email": "ana@example.com"}
    })
}

async fn post_payment(app: Router, gateway: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/gateways/{}/payments", gateway))
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Gateway Listing
// =============================================================================

#[tokio::test]
async fn lists_enabled_gateway() {
    let (status, body) = get_json(app_with(&MockPaymentProvider::new(), true), "/api/gateways").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": "pagseguro",
            "title": "PagSeguro Payment",
            "description": "Pay securely using your credit card through PagSeguro.",
            "has_fields": true
        }])
    );
}

#[tokio::test]
async fn disabled_gateway_is_not_listed() {
    let (status, body) = get_json(app_with(&MockPaymentProvider::new(), false), "/api/gateways").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Payment Submission
// =============================================================================

#[tokio::test]
async fn accepted_payment_returns_redirect() {
    let mock = MockPaymentProvider::new();

    let (status, body) = post_payment(app_with(&mock, true), "pagseguro", widget_order()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"result": "success", "redirect": "https://provider.example/pay/42"})
    );
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.calls()[0].request.reference, "42");
}

#[tokio::test]
async fn order_without_items_is_bad_request() {
    let mock = MockPaymentProvider::new();
    let mut order = widget_order();
    order["items"] = json!([]);

    let (status, body) = post_payment(app_with(&mock, true), "pagseguro", order).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "failure");
    assert_eq!(body["kind"], "validation");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Payment error: "));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn provider_timeout_is_bad_gateway() {
    let mock = MockPaymentProvider::new();
    mock.set_error(PaymentError::timeout("PagSeguro did not answer within 20s"));

    let (status, body) = post_payment(app_with(&mock, true), "pagseguro", widget_order()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "transport");
    assert_eq!(body["message"], "Payment error: PagSeguro did not answer within 20s");
}

#[tokio::test]
async fn provider_rejection_is_payment_required() {
    let mock = MockPaymentProvider::new();
    mock.set_error(
        PaymentError::rejected("11004: Currency is required.").with_provider_code("11004"),
    );

    let (status, body) = post_payment(app_with(&mock, true), "pagseguro", widget_order()).await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["kind"], "provider_rejection");
    assert_eq!(body["message"], "Payment error: 11004: Currency is required.");
}

#[tokio::test]
async fn disabled_gateway_rejects_payment_without_provider_call() {
    let mock = MockPaymentProvider::new();

    let (status, body) = post_payment(app_with(&mock, false), "pagseguro", widget_order()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn order_without_currency_is_validation_failure() {
    let mock = MockPaymentProvider::new();
    let mut order = widget_order();
    order.as_object_mut().unwrap().remove("currency");

    let (status, body) = post_payment(app_with(&mock, true), "pagseguro", order).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "failure");
    assert_eq!(body["kind"], "validation");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Payment error: invalid order: "));
    assert!(message.contains("currency"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn negative_quantity_is_validation_failure() {
    let mock = MockPaymentProvider::new();
    let mut order = widget_order();
    order["items"][0]["quantity"] = json!(-1);

    let (status, body) = post_payment(app_with(&mock, true), "pagseguro", order).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "failure");
    assert_eq!(body["kind"], "validation");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn unknown_gateway_is_not_found() {
    let mock = MockPaymentProvider::new();

    let (status, body) = post_payment(app_with(&mock, true), "stripe", widget_order()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GATEWAY_NOT_FOUND");
    assert_eq!(mock.call_count(), 0);
}
