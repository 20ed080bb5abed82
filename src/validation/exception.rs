//! The error raised at the validation boundary

use thiserror::Error;

use super::failure::ValidationFailure;
use super::set::ValidationSet;

/// A rejected construction or update.
///
/// Raised once, by [`ValidationSet::validate_and_throw`], when at least one
/// check failed. It owns the set it was raised from, so callers can inspect
/// every failure and not just the first.
///
/// # Example
///
/// ```
/// use keel::ValidationSet;
///
/// let mut set = ValidationSet::new("invalid parameters for updating the entity");
/// set.add_error("id is required").add_error("value must be >= 0");
///
/// let err = set.validate_and_throw().unwrap_err();
/// assert_eq!(err.to_string(), "invalid parameters for updating the entity");
/// assert_eq!(
///     err.report(),
///     "invalid parameters for updating the entity\n  - id is required\n  - value must be >= 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationException {
    message: String,
    validation_set: ValidationSet,
}

impl ValidationException {
    /// Summary used when the set was raised without one.
    pub const DEFAULT_MESSAGE: &'static str = "validation failed";

    pub(crate) fn new(validation_set: ValidationSet) -> Self {
        let message = validation_set
            .error_message()
            .unwrap_or(Self::DEFAULT_MESSAGE)
            .to_string();
        Self {
            message,
            validation_set,
        }
    }

    /// The summary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The set this exception was raised from.
    pub fn validation_set(&self) -> &ValidationSet {
        &self.validation_set
    }

    /// Every failure, in the order the checks ran.
    pub fn failures(&self) -> &[ValidationFailure] {
        self.validation_set.failures()
    }

    /// Give the set back, e.g. to merge it into a larger report.
    pub fn into_validation_set(self) -> ValidationSet {
        self.validation_set
    }

    /// Multi-line rendering: the summary, then one indented line per failure.
    pub fn report(&self) -> String {
        let mut out = self.message.clone();
        for failure in self.failures() {
            out.push_str("\n  - ");
            out.push_str(failure.message());
        }
        out
    }
}
