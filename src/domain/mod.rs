//! Domain layer containing checkout types and validation rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, validation errors)
//! - `checkout` - Order snapshots, credentials, gateway settings and payment outcomes

pub mod checkout;
pub mod foundation;
