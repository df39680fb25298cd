//! Payment gateway port: the capability contract a checkout host invokes.
//!
//! A gateway is configured with merchant settings and submits orders. The
//! host finds gateways through an explicitly injected registry rather than
//! global discovery.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::checkout::{Credentials, GatewaySettings, OrderSnapshot, PaymentOutcome};
use crate::domain::foundation::ValidationError;

/// Port for pluggable checkout gateways.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Stable identifier used for routing (e.g. `"pagseguro"`).
    fn id(&self) -> &str;

    /// What the host shows in its payment-method listing.
    fn descriptor(&self) -> GatewayDescriptor;

    /// Replace the gateway's settings after validating them.
    fn configure(&self, settings: GatewaySettings) -> Result<(), ValidationError>;

    /// Submit an order with explicit credentials.
    ///
    /// Never fails with an error: every problem is reported as
    /// [`PaymentOutcome::Failure`].
    async fn submit(&self, order: &OrderSnapshot, credentials: &Credentials) -> PaymentOutcome;

    /// Submit an order with the credentials from the configured settings.
    async fn process_payment(&self, order: &OrderSnapshot) -> PaymentOutcome;
}

/// Listing entry for a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayDescriptor {
    pub id: String,
    pub method_title: String,
    pub method_description: String,
    pub title: String,
    pub description: String,
    pub has_fields: bool,
    pub enabled: bool,
}
