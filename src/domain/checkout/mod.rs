//! Checkout domain module.
//!
//! Everything the gateway needs to know about one payment attempt.
//!
//! # Module Structure
//!
//! - `currency` - Supported ISO-4217 currencies
//! - `order` - `OrderSnapshot`, `LineItem` and `Buyer`
//! - `credentials` - Provider account credentials
//! - `settings` - Merchant-configured gateway settings
//! - `outcome` - `PaymentOutcome` returned to the host

mod credentials;
mod currency;
mod order;
mod outcome;
mod settings;

pub use credentials::Credentials;
pub use currency::Currency;
pub use order::{Buyer, LineItem, OrderSnapshot, ValidatedOrder, MAX_ITEM_QUANTITY};
pub use outcome::{FailureKind, FailureReason, PaymentOutcome};
pub use settings::GatewaySettings;
