//! HTTP adapter for checkout endpoints.
//!
//! Exposes the registered gateways via REST API:
//! - `GET /api/gateways` - List enabled gateways
//! - `POST /api/gateways/:id/payments` - Submit an order for payment

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CheckoutApiError, CheckoutAppState};
pub use routes::checkout_router;
