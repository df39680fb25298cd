//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured redirects
//! - Error injection
//! - Response delay
//! - Call tracking

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::checkout::Credentials;
use crate::ports::{PaymentError, PaymentProvider, PaymentRedirect, PaymentRegistration};

/// Mock payment provider for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the gateway owns another.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Inject errors
/// mock.set_error(PaymentError::timeout("no answer"));
///
/// let gateway = PaymentGatewayAdapter::new(Arc::new(mock.clone()), settings)?;
/// gateway.process_payment(&order).await;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Redirect to return instead of the generated one.
    next_redirect: Option<PaymentRedirect>,

    /// Error returned by every call until cleared.
    error: Option<PaymentError>,

    /// How long each call waits before answering.
    delay: Option<Duration>,

    call_log: Vec<RecordedRegistration>,
}

/// Registration seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRegistration {
    pub request: PaymentRegistration,
    pub account_email: String,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Return this redirect from every successful call.
    pub fn set_redirect(&self, redirect: PaymentRedirect) {
        self.state().next_redirect = Some(redirect);
    }

    /// Fail every call with this error until [`clear_errors`](Self::clear_errors).
    pub fn set_error(&self, error: PaymentError) {
        self.state().error = Some(error);
    }

    pub fn clear_errors(&self) {
        self.state().error = None;
    }

    /// Wait this long before answering each call.
    pub fn set_delay(&self, delay: Duration) {
        self.state().delay = Some(delay);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded registrations.
    pub fn calls(&self) -> Vec<RecordedRegistration> {
        self.state().call_log.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().call_log.len()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn register_payment(
        &self,
        request: PaymentRegistration,
        credentials: &Credentials,
    ) -> Result<PaymentRedirect, PaymentError> {
        let (result, delay) = {
            let mut state = self.state();

            let reference = request.reference.clone();
            state.call_log.push(RecordedRegistration {
                request,
                account_email: credentials.email().to_string(),
            });

            let result = match &state.error {
                Some(error) => Err(error.clone()),
                None => Ok(state.next_redirect.clone().unwrap_or_else(|| PaymentRedirect {
                    code: format!("MOCK-{}", reference),
                    redirect_url: format!("https://provider.example/pay/{}", reference),
                    registered_at: None,
                })),
            };
            (result, state.delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }
}
