//! A single recorded violation

use std::fmt;

/// One violated constraint, carrying its formatted message.
///
/// Failures are only produced by a [`ValidationSet`](crate::ValidationSet)
/// when a check does not hold; they are plain data and never raised on their
/// own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The formatted message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take the message out.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl AsRef<str> for ValidationFailure {
    fn as_ref(&self) -> &str {
        &self.message
    }
}

impl PartialEq<str> for ValidationFailure {
    fn eq(&self, other: &str) -> bool {
        self.message == other
    }
}

impl PartialEq<&str> for ValidationFailure {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_access() {
        let failure = ValidationFailure::new("value is required");
        assert_eq!(failure.message(), "value is required");
        assert_eq!(failure.to_string(), "value is required");
        assert_eq!(failure, "value is required");
        assert_eq!(failure.into_message(), "value is required".to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_plain_string() {
        let failure = ValidationFailure::new("id is required");
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#""id is required""#);

        let back: ValidationFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
