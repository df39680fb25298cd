//! PagSeguro payment provider adapter.
//!
//! Implements the `PaymentProvider` port against the PagSeguro v2 checkout
//! API:
//! - Form-encoded payment registration
//! - XML checkout and error responses
//! - Redirect URL construction for the hosted payment page
//!
//! # Security
//!
//! - The access token travels only in the request query string
//! - Transport errors are stripped of their URL before being reported
//! - Credentials are handled via `secrecy::SecretString`

mod mock_payment_provider;
mod pagseguro_adapter;
mod wire_types;

pub use mock_payment_provider::{MockPaymentProvider, RecordedRegistration};
pub use pagseguro_adapter::{PagSeguroConfig, PagSeguroEnvironment, PagSeguroPaymentAdapter};
