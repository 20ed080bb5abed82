//! Testing utilities for validators
//!
//! Assertion macros that work on anything carrying validation failures: a
//! [`ValidationSet`], a [`ValidationException`], or the `Result` returned by a
//! validated constructor.
//!
//! # Examples
//!
//! ```rust
//! use keel::{assert_failure_messages, assert_invalid, assert_valid, ValidationSet};
//!
//! let mut set = ValidationSet::new("bad input");
//! assert_valid!(set);
//!
//! set.add_error("name is required");
//! assert_invalid!(set);
//! assert_failure_messages!(set, ["name is required"]);
//! ```
//!
//! With the `proptest` feature, `ValidationFailure` and `ValidationSet`
//! implement `proptest::arbitrary::Arbitrary`.

use crate::{ValidationException, ValidationFailure, ValidationSet};

/// Anything the assertion macros can inspect.
pub trait Verdict {
    /// Failure messages in order; empty when valid.
    fn failure_messages(&self) -> Vec<String>;
}

fn messages(failures: &[ValidationFailure]) -> Vec<String> {
    failures.iter().map(|f| f.message().to_string()).collect()
}

impl Verdict for ValidationSet {
    fn failure_messages(&self) -> Vec<String> {
        messages(self.failures())
    }
}

impl Verdict for ValidationException {
    fn failure_messages(&self) -> Vec<String> {
        messages(self.failures())
    }
}

impl<T> Verdict for Result<T, ValidationException> {
    fn failure_messages(&self) -> Vec<String> {
        match self {
            Ok(_) => Vec::new(),
            Err(err) => err.failure_messages(),
        }
    }
}

impl<V: Verdict + ?Sized> Verdict for &V {
    fn failure_messages(&self) -> Vec<String> {
        (**self).failure_messages()
    }
}

/// Assert that nothing failed.
///
/// ```rust
/// use keel::{assert_valid, ValidationSet};
///
/// assert_valid!(ValidationSet::new("unused"));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($verdict:expr) => {{
        let messages = $crate::testing::Verdict::failure_messages(&$verdict);
        if !messages.is_empty() {
            panic!("Expected valid, got failures: {:?}", messages);
        }
    }};
}

/// Assert that at least one check failed.
///
/// ```rust
/// use keel::{assert_invalid, ValidationSet};
///
/// let mut set = ValidationSet::default();
/// set.add_error("broken");
/// assert_invalid!(set);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($verdict:expr) => {{
        let messages = $crate::testing::Verdict::failure_messages(&$verdict);
        if messages.is_empty() {
            panic!("Expected failures, got a valid outcome");
        }
    }};
}

/// Assert the exact failure messages, in order.
///
/// ```rust
/// use keel::{assert_failure_messages, ValidationSet};
///
/// let mut set = ValidationSet::default();
/// set.add_error("a").add_error("b");
/// assert_failure_messages!(set, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_failure_messages {
    ($verdict:expr, $expected:expr) => {{
        let messages = $crate::testing::Verdict::failure_messages(&$verdict);
        assert_eq!(messages, $expected, "failure messages differ");
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationFailure {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[a-z_]{1,12} [a-z ]{0,24}"
            .prop_map(ValidationFailure::new)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            proptest::option::of("[a-z ]{1,24}"),
            proptest::collection::vec(any::<ValidationFailure>(), 0..6),
        )
            .prop_map(|(summary, failures)| {
                let mut set = match summary {
                    Some(summary) => ValidationSet::new(summary),
                    None => ValidationSet::default(),
                };
                for failure in failures {
                    set.add_error(failure.into_message());
                }
                set
            })
            .boxed()
    }
}
