//! PaymentGatewayAdapter - single-shot checkout payment submission.
//!
//! Validates the order and credentials, builds a provider registration
//! request, performs exactly one provider call and folds every result into
//! a [`PaymentOutcome`]. Marking the order as paid is left to the host once
//! it observes `Success`.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::checkout::{
    Credentials, FailureKind, GatewaySettings, OrderSnapshot, PaymentOutcome,
};
use crate::domain::foundation::{SubmissionId, ValidationError};
use crate::ports::{GatewayDescriptor, PaymentGateway, PaymentProvider, PaymentRegistration};

/// Identifier the PagSeguro gateway registers under.
pub const PAGSEGURO_GATEWAY_ID: &str = "pagseguro";

const PAGSEGURO_METHOD_TITLE: &str = "PagSeguro";
const PAGSEGURO_METHOD_DESCRIPTION: &str = "Custom integration with PagSeguro.";

/// Checkout gateway delegating payment registration to a [`PaymentProvider`].
pub struct PaymentGatewayAdapter {
    id: String,
    method_title: String,
    method_description: String,
    provider: Arc<dyn PaymentProvider>,
    settings: RwLock<GatewaySettings>,
}

impl PaymentGatewayAdapter {
    /// Creates the PagSeguro gateway over the given provider.
    pub fn new(
        provider: Arc<dyn PaymentProvider>,
        settings: GatewaySettings,
    ) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self {
            id: PAGSEGURO_GATEWAY_ID.to_string(),
            method_title: PAGSEGURO_METHOD_TITLE.to_string(),
            method_description: PAGSEGURO_METHOD_DESCRIPTION.to_string(),
            provider,
            settings: RwLock::new(settings),
        })
    }

    /// Overrides the identity shown to the host.
    pub fn with_identity(
        mut self,
        id: impl Into<String>,
        method_title: impl Into<String>,
        method_description: impl Into<String>,
    ) -> Self {
        self.id = id.into();
        self.method_title = method_title.into();
        self.method_description = method_description.into();
        self
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> GatewaySettings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PaymentGateway for PaymentGatewayAdapter {
    fn id(&self) -> &str {
        &self.id
    }

    fn descriptor(&self) -> GatewayDescriptor {
        let settings = self.settings();
        GatewayDescriptor {
            id: self.id.clone(),
            method_title: self.method_title.clone(),
            method_description: self.method_description.clone(),
            title: settings.title,
            description: settings.description,
            has_fields: true,
            enabled: settings.enabled,
        }
    }

    fn configure(&self, settings: GatewaySettings) -> Result<(), ValidationError> {
        settings.validate()?;
        *self.settings.write().unwrap_or_else(PoisonError::into_inner) = settings;
        tracing::info!(gateway = %self.id, "Gateway settings updated");
        Ok(())
    }

    async fn submit(&self, order: &OrderSnapshot, credentials: &Credentials) -> PaymentOutcome {
        let submission_id = SubmissionId::new();

        let validated = match order.validate() {
            Ok(validated) => validated,
            Err(e) => {
                tracing::warn!(
                    %submission_id,
                    gateway = %self.id,
                    order_id = %order.id,
                    error = %e,
                    "Order rejected before submission"
                );
                return e.into();
            }
        };

        if let Err(e) = credentials.validate() {
            tracing::warn!(
                %submission_id,
                gateway = %self.id,
                order_id = %order.id,
                error = %e,
                "Credentials rejected before submission"
            );
            return e.into();
        }

        let request = PaymentRegistration::from(validated);
        tracing::info!(
            %submission_id,
            gateway = %self.id,
            provider = self.provider.name(),
            order_id = %request.reference,
            currency = %request.currency,
            items = request.items.len(),
            total = %order.total(),
            "Registering payment"
        );

        match self.provider.register_payment(request, credentials).await {
            Ok(redirect) if redirect.redirect_url.trim().is_empty() => {
                tracing::error!(
                    %submission_id,
                    checkout_code = %redirect.code,
                    "Provider returned no redirect URL"
                );
                PaymentOutcome::failure(
                    FailureKind::ProviderRejection,
                    "Provider returned no redirect URL",
                )
            }
            Ok(redirect) => {
                tracing::info!(
                    %submission_id,
                    order_id = %order.id,
                    checkout_code = %redirect.code,
                    "Payment registered"
                );
                PaymentOutcome::success(redirect.redirect_url)
            }
            Err(e) => {
                tracing::warn!(
                    %submission_id,
                    order_id = %order.id,
                    error = %e,
                    provider_code = e.provider_code.as_deref().unwrap_or(""),
                    "Payment registration failed"
                );
                PaymentOutcome::failure(e.failure_kind(), e.message)
            }
        }
    }

    async fn process_payment(&self, order: &OrderSnapshot) -> PaymentOutcome {
        let settings = self.settings();
        if !settings.enabled {
            tracing::warn!(gateway = %self.id, order_id = %order.id, "Payment attempted on disabled gateway");
            return ValidationError::GatewayDisabled.into();
        }
        self.submit(order, &settings.credentials()).await
    }
}
