//! Order snapshot handed over by the checkout host.
//!
//! The snapshot is read-only to the gateway. `OrderSnapshot::validate`
//! performs every check that can fail before a network call is made and
//! returns a [`ValidatedOrder`] that is safe to send to a provider.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::Currency;

/// Largest quantity the provider accepts for a single line item.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Largest unit amount the provider accepts, in currency units.
const MAX_ITEM_AMOUNT: i64 = 9_999_999;

/// Immutable view of a purchase at payment time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Host-side order identifier, sent as the provider reference.
    pub id: String,

    /// Three-letter currency code as supplied by the host.
    pub currency: String,

    /// Ordered line items.
    pub items: Vec<LineItem>,

    /// Billing identity of the shopper.
    pub buyer: Buyer,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Shopper identity as known to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub name: String,
    pub email: String,
}

impl Buyer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds a buyer from separate billing first and last names.
    pub fn from_parts(first_name: &str, last_name: &str, email: impl Into<String>) -> Self {
        let name = format!("{} {}", first_name.trim(), last_name.trim())
            .trim()
            .to_string();
        Self {
            name,
            email: email.into(),
        }
    }
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let field = |name: &str| format!("items[{}].{}", index, name);

        if self.id.trim().is_empty() {
            return Err(ValidationError::empty_field(field("id")));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field(field("name")));
        }
        if self.quantity == 0 || self.quantity > MAX_ITEM_QUANTITY {
            return Err(ValidationError::out_of_range(
                field("quantity"),
                1,
                i64::from(MAX_ITEM_QUANTITY),
                i64::from(self.quantity),
            ));
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err(ValidationError::invalid_format(
                field("unit_price"),
                "must not be negative",
            ));
        }
        if self.unit_price.normalize().scale() > 2 {
            return Err(ValidationError::invalid_format(
                field("unit_price"),
                "more than two decimal places",
            ));
        }
        if self.unit_price > Decimal::from(MAX_ITEM_AMOUNT) {
            return Err(ValidationError::invalid_format(
                field("unit_price"),
                format!("exceeds {}.00", MAX_ITEM_AMOUNT),
            ));
        }
        Ok(())
    }
}

/// An order that passed validation, ready to be turned into a provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub reference: String,
    pub currency: Currency,
    pub items: Vec<LineItem>,
    pub buyer_name: Option<String>,
    pub buyer_email: Option<String>,
}

impl OrderSnapshot {
    /// Checks the snapshot and normalizes it for submission.
    ///
    /// Blank buyer fields become `None`; the provider treats the sender as
    /// optional and collects it on its own payment page.
    pub fn validate(&self) -> Result<ValidatedOrder, ValidationError> {
        let reference = self.id.trim();
        if reference.is_empty() {
            return Err(ValidationError::empty_field("order.id"));
        }

        let currency: Currency = self.currency.parse()?;

        if self.items.is_empty() {
            return Err(ValidationError::NoLineItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }

        let buyer_email = non_blank(&self.buyer.email);
        if let Some(email) = &buyer_email {
            if !email.contains('@') {
                return Err(ValidationError::invalid_format(
                    "buyer.email",
                    "missing @ symbol",
                ));
            }
        }

        Ok(ValidatedOrder {
            reference: reference.to_string(),
            currency,
            items: self.items.clone(),
            buyer_name: non_blank(&self.buyer.name),
            buyer_email,
        })
    }

    /// Sum of `unit_price * quantity` over all items.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.quantity))
            .sum()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
