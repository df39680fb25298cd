//! Application layer - gateway workflow and registry.
//!
//! This layer orchestrates domain validation and the provider port:
//!
//! - `PaymentGatewayAdapter` turns an order into a `PaymentOutcome`
//! - `GatewayRegistry` holds the gateways a host can route to

mod gateway;
mod registry;

pub use gateway::{PaymentGatewayAdapter, PAGSEGURO_GATEWAY_ID};
pub use registry::{GatewayRegistry, RegistryError};
