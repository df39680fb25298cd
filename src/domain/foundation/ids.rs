//! Strongly-typed identifier value objects.

use std::fmt;
use uuid::Uuid;

/// Identifier of a single payment submission attempt.
///
/// Not sent to the provider; it only correlates the log lines of one
/// checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Creates a new random SubmissionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_ids_are_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }

    #[test]
    fn submission_id_displays_as_hyphenated_uuid() {
        let shown = SubmissionId::new().to_string();
        assert_eq!(shown.len(), 36);
        assert!(Uuid::parse_str(&shown).is_ok());
    }
}
