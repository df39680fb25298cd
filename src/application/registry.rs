//! Gateway registry handed to the checkout host.
//!
//! Gateways are registered explicitly at startup; nothing is discovered
//! through global state.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{GatewayDescriptor, PaymentGateway};

/// Errors from registering gateways.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Gateway '{0}' is already registered")]
    DuplicateGateway(String),
}

/// Ordered set of gateways, keyed by id.
#[derive(Clone, Default)]
pub struct GatewayRegistry {
    gateways: Vec<Arc<dyn PaymentGateway>>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a gateway. Ids must be unique.
    pub fn register(&mut self, gateway: Arc<dyn PaymentGateway>) -> Result<(), RegistryError> {
        if self.gateways.iter().any(|g| g.id() == gateway.id()) {
            return Err(RegistryError::DuplicateGateway(gateway.id().to_string()));
        }
        tracing::debug!(gateway = gateway.id(), "Gateway registered");
        self.gateways.push(gateway);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_gateway(mut self, gateway: Arc<dyn PaymentGateway>) -> Result<Self, RegistryError> {
        self.register(gateway)?;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn PaymentGateway>> {
        self.gateways.iter().find(|g| g.id() == id).cloned()
    }

    /// Descriptors of enabled gateways, in registration order.
    pub fn available(&self) -> Vec<GatewayDescriptor> {
        self.gateways
            .iter()
            .map(|g| g.descriptor())
            .filter(|d| d.enabled)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}
