//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `pagseguro` - PagSeguro checkout API client and an in-memory mock provider
//! - `http` - axum routes exposing the gateways to a checkout host

pub mod http;
pub mod pagseguro;

pub use pagseguro::{MockPaymentProvider, PagSeguroConfig, PagSeguroEnvironment, PagSeguroPaymentAdapter};
