//! Result of a payment submission as seen by the checkout host.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Determinate result of one submission: the host either redirects the
/// shopper or shows an error notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// The provider registered the payment.
    Success { redirect_url: String },

    /// The payment was not registered.
    Failure { reason: FailureReason },
}

/// Which stage of the submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input rejected before any network call.
    Validation,

    /// Network error or timeout talking to the provider.
    Transport,

    /// The provider answered with an error or an unusable response.
    ProviderRejection,
}

/// Displayable failure description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReason {
    pub kind: FailureKind,
    pub message: String,
}

impl PaymentOutcome {
    pub fn success(redirect_url: impl Into<String>) -> Self {
        PaymentOutcome::Success {
            redirect_url: redirect_url.into(),
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        PaymentOutcome::Failure {
            reason: FailureReason {
                kind,
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Success { .. })
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            PaymentOutcome::Success { redirect_url } => Some(redirect_url),
            PaymentOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            PaymentOutcome::Success { .. } => None,
            PaymentOutcome::Failure { reason } => Some(reason),
        }
    }
}

impl From<ValidationError> for PaymentOutcome {
    fn from(err: ValidationError) -> Self {
        PaymentOutcome::failure(FailureKind::Validation, err.to_string())
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Validation => "validation",
            FailureKind::Transport => "transport",
            FailureKind::ProviderRejection => "provider_rejection",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_exposes_redirect_only() {
        let outcome = PaymentOutcome::success("https://provider.example/pay/42");
        assert!(outcome.is_success());
        assert_eq!(outcome.redirect_url(), Some("https://provider.example/pay/42"));
        assert!(outcome.failure_reason().is_none());
    }

    #[test]
    fn failure_exposes_reason_only() {
        let outcome = PaymentOutcome::failure(FailureKind::Transport, "timed out");
        assert!(!outcome.is_success());
        assert!(outcome.redirect_url().is_none());
        let reason = outcome.failure_reason().unwrap();
        assert_eq!(reason.kind, FailureKind::Transport);
        assert_eq!(reason.to_string(), "transport: timed out");
    }

    #[test]
    fn validation_error_becomes_validation_failure() {
        let outcome: PaymentOutcome = ValidationError::NoLineItems.into();
        let reason = outcome.failure_reason().unwrap();
        assert_eq!(reason.kind, FailureKind::Validation);
        assert!(reason.message.contains("at least one line item"));
    }

    #[test]
    fn serializes_with_result_tag() {
        let json = serde_json::to_value(PaymentOutcome::success("https://x")).unwrap();
        assert_eq!(json["result"], "success");
        assert_eq!(json["redirect_url"], "https://x");

        let json =
            serde_json::to_value(PaymentOutcome::failure(FailureKind::Validation, "bad")).unwrap();
        assert_eq!(json["result"], "failure");
        assert_eq!(json["reason"]["kind"], "validation");
    }
}
