//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentProvider` - Remote payment registration (PagSeguro, mocks)
//! - `PaymentGateway` - Capability contract a checkout host invokes

mod payment_gateway;
mod payment_provider;

pub use payment_gateway::{GatewayDescriptor, PaymentGateway};
pub use payment_provider::{
    PaymentError, PaymentErrorCode, PaymentProvider, PaymentRedirect, PaymentRegistration,
    RegistrationItem,
};
