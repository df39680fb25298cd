//! Axum router configuration for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_gateways, submit_payment, CheckoutAppState};

/// Create the checkout API router.
///
/// # Routes
/// - `GET /gateways` - List enabled gateways
/// - `POST /gateways/:id/payments` - Pay for an order through a gateway
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", checkout_router())
///     .with_state(CheckoutAppState::new(registry));
/// ```
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new()
        .route("/gateways", get(list_gateways))
        .route("/gateways/:id/payments", post(submit_payment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use crate::adapters::pagseguro::MockPaymentProvider;
    use crate::application::{GatewayRegistry, PaymentGatewayAdapter};
    use crate::domain::checkout::GatewaySettings;

    fn app() -> Router {
        let settings = GatewaySettings {
            email: "shop@example.com".to_string(),
            token: SecretString::new("tok123".to_string()),
            ..Default::default()
        };
        let gateway =
            PaymentGatewayAdapter::new(Arc::new(MockPaymentProvider::new()), settings).unwrap();
        let registry = GatewayRegistry::new().with_gateway(Arc::new(gateway)).unwrap();

        Router::new()
            .nest("/api", checkout_router())
            .with_state(CheckoutAppState::new(Arc::new(registry)))
    }

    #[tokio::test]
    async fn checkout_router_mounts_gateway_listing() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/gateways")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn payments_route_rejects_get() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/gateways/pagseguro/payments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
