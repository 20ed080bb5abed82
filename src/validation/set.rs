//! The fail-together accumulator
//!
//! A [`ValidationSet`] collects every violated constraint of one validation
//! call, in the order the checks were declared. Each `add_*` method always
//! runs and always hands back the same set, so all the checks for an entity
//! read as one chain and none of them is skipped because an earlier one
//! failed. The set is consumed by [`ValidationSet::validate_and_throw`], which
//! turns a non-empty set into a single [`ValidationException`].
//!
//! # Example
//!
//! ```
//! use keel::ValidationSet;
//!
//! let name = "";
//! let age = -3;
//!
//! let mut set = ValidationSet::new("invalid parameters for creating the entity");
//! set.add_is_not_empty_validation(name, "{} must not be empty", &[&"name"])
//!     .add_greater_than_or_equal_to_validation(&age, &0, "{} must be >= {}", &[&"age", &0]);
//!
//! let err = set.validate_and_throw().unwrap_err();
//! assert_eq!(err.message(), "invalid parameters for creating the entity");
//! assert_eq!(err.failures().len(), 2);
//! assert_eq!(err.failures()[1], "age must be >= 0");
//! ```

use std::fmt::Display;

use super::exception::ValidationException;
use super::failure::ValidationFailure;
use crate::enumeration::{self, Enumeration};
use crate::predicate::{self, Predicate, Text};
use crate::template;
use crate::Semigroup;

/// Ordered collector of validation failures plus a summary message.
///
/// Valid iff no failure was recorded. The summary is read when the set is
/// raised, so it can be replaced at any point of the chain.
///
/// Not meant to be shared: build one per validation call, raise it, drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationSet {
    error_message: Option<String>,
    failures: Vec<ValidationFailure>,
}

impl ValidationSet {
    /// An empty set with the summary used when it is raised.
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: Some(error_message.into()),
            failures: Vec::new(),
        }
    }

    /// Summary message, if one was set.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Recorded failures, in insertion order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Number of recorded failures.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True iff nothing failed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Record a failure with a literal message. No deduplication.
    pub fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        let failure = ValidationFailure::new(message);

        #[cfg(feature = "tracing")]
        tracing::trace!(target: "keel::validation", failure = %failure, "check failed");

        self.failures.push(failure);
        self
    }

    /// Replace the summary used when raising.
    pub fn set_error_message(&mut self, error_message: impl Into<String>) -> &mut Self {
        self.error_message = Some(error_message.into());
        self
    }

    /// Record `template` formatted with `params` unless `condition` holds.
    ///
    /// The template is only rendered on failure. A template that does not
    /// match its parameters panics in debug builds; see
    /// [`format_template`](crate::template::format_template).
    pub fn add_validation(
        &mut self,
        condition: bool,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        if !condition {
            self.add_error(template::render(template, params));
        }
        self
    }

    /// Record a failure unless `predicate` accepts `value`.
    ///
    /// ```
    /// use keel::ValidationSet;
    /// use keel::predicate::{ge, le, PredicateExt};
    ///
    /// let mut set = ValidationSet::default();
    /// let percent = ge(0).and(le(100));
    /// set.add_validation_with_condition(&120, percent, "{} out of range", &[&"percent"])
    ///     .add_validation_with_condition(&7, |n: &i32| n % 2 == 0, "{} must be even", &[&7]);
    ///
    /// assert_eq!(set.failure_count(), 2);
    /// ```
    pub fn add_validation_with_condition<T, P>(
        &mut self,
        value: &T,
        predicate: P,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self
    where
        T: ?Sized,
        P: Predicate<T>,
    {
        self.add_validation(predicate.check(value), template, params)
    }

    /// Requires `value > min`.
    pub fn add_greater_than_validation<T: PartialOrd + ?Sized>(
        &mut self,
        value: &T,
        min: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::is_greater_than(value, min), template, params)
    }

    /// Requires `value >= min`.
    pub fn add_greater_than_or_equal_to_validation<T: PartialOrd + ?Sized>(
        &mut self,
        value: &T,
        min: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(
            predicate::is_greater_than_or_equal_to(value, min),
            template,
            params,
        )
    }

    /// Requires `value < end`.
    pub fn add_less_than_validation<T: PartialOrd + ?Sized>(
        &mut self,
        value: &T,
        end: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::is_less_than(value, end), template, params)
    }

    /// Requires `value <= end`.
    pub fn add_less_or_equal_to_validation<T: PartialOrd + ?Sized>(
        &mut self,
        value: &T,
        end: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::is_less_or_equal_to(value, end), template, params)
    }

    /// Requires `start <= value <= end`.
    pub fn add_between_validation<T: PartialOrd + ?Sized>(
        &mut self,
        value: &T,
        start: &T,
        end: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::between(value, start, end), template, params)
    }

    /// Requires the text to be present with `start..=end` characters.
    pub fn add_length_between_validation<T: Text + ?Sized>(
        &mut self,
        value: &T,
        start: usize,
        end: usize,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::length_between(value, start, end), template, params)
    }

    /// Requires the value to be present.
    pub fn add_is_not_none_validation<T>(
        &mut self,
        value: &Option<T>,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::is_not_none(value), template, params)
    }

    /// Requires the text to be present and non-empty.
    pub fn add_is_not_empty_validation<T: Text + ?Sized>(
        &mut self,
        value: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(predicate::is_not_empty(value), template, params)
    }

    /// Requires the text to hold at least one non-whitespace character.
    pub fn add_is_not_empty_or_white_space_validation<T: Text + ?Sized>(
        &mut self,
        value: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(
            predicate::is_not_empty_or_white_space(value),
            template,
            params,
        )
    }

    /// Requires the value to be present and a member of its enumeration.
    pub fn add_is_defined_validation<E: Enumeration>(
        &mut self,
        value: Option<E>,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self {
        self.add_validation(enumeration::is_defined(value), template, params)
    }

    /// Requires the text to name a member of `E` exactly.
    ///
    /// Absent text does not name anything.
    ///
    /// ```
    /// use keel::ValidationSet;
    /// # keel::enumeration! { enum Side { Buy, Sell } }
    ///
    /// let mut set = ValidationSet::default();
    /// set.add_is_parsed_validation::<Side, _>("Buy", "'{}' is not a {}", &[&"Buy", &"Side"])
    ///     .add_is_parsed_validation::<Side, _>("Hold", "'{}' is not a {}", &[&"Hold", &"Side"]);
    ///
    /// assert_eq!(set.failures().len(), 1);
    /// assert_eq!(set.failures()[0], "'Hold' is not a Side");
    /// ```
    pub fn add_is_parsed_validation<E, T>(
        &mut self,
        text: &T,
        template: &str,
        params: &[&dyn Display],
    ) -> &mut Self
    where
        E: Enumeration,
        T: Text + ?Sized,
    {
        let parsed = text.as_text().and_then(E::from_name);
        self.add_validation(parsed.is_some(), template, params)
    }

    /// Append every failure of `other`, in order.
    ///
    /// The summary of `other` replaces this one only if it has one.
    pub fn extend_from(&mut self, other: ValidationSet) -> &mut Self {
        if other.error_message.is_some() {
            self.error_message = other.error_message;
        }
        self.failures.extend(other.failures);
        self
    }

    /// Raise if anything failed.
    ///
    /// Consumes the set: the summary in effect now and the full failure list
    /// move into the returned [`ValidationException`].
    pub fn validate_and_throw(self) -> Result<(), ValidationException> {
        if self.is_valid() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "keel::validation",
            summary = self.error_message().unwrap_or(ValidationException::DEFAULT_MESSAGE),
            failures = self.failures.len(),
            "validation rejected"
        );

        Err(ValidationException::new(self))
    }

    /// Alias of [`validate_and_throw`](Self::validate_and_throw).
    pub fn into_result(self) -> Result<(), ValidationException> {
        self.validate_and_throw()
    }
}

impl Semigroup for ValidationSet {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend_from(other);
        self
    }
}

impl IntoIterator for ValidationSet {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationSet {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
