//! Presence predicates

use super::combinators::Predicate;

/// The value is present (`Some`).
///
/// ```rust
/// use keel::predicate::is_not_none;
///
/// assert!(is_not_none(&Some(0)));
/// assert!(!is_not_none(&None::<i32>));
/// ```
#[inline]
pub fn is_not_none<T>(obj: &Option<T>) -> bool {
    obj.is_some()
}

/// Predicate form of [`is_not_none`].
#[derive(Clone, Copy, Default, Debug)]
pub struct Present;

impl<T> Predicate<Option<T>> for Present {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        is_not_none(value)
    }
}

/// Create a predicate that checks an optional value is present.
pub fn present() -> Present {
    Present
}
