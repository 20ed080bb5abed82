//! Semigroup trait for associative merging
//!
//! Validation sets built by separate validators can be merged into one report.
//! Merging is associative, so the order of grouping never changes the result:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Example
//!
//! ```
//! use keel::{Semigroup, ValidationSet};
//!
//! let mut fields = ValidationSet::new("invalid note");
//! fields.add_error("value must be >= 0");
//!
//! let mut identity = ValidationSet::default();
//! identity.add_error("id is required");
//!
//! let merged = fields.combine(identity);
//! assert_eq!(merged.failure_count(), 2);
//! assert_eq!(merged.error_message(), Some("invalid note"));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
