//! Ordering predicates
//!
//! Comparisons over any `PartialOrd` value. Bounds are inclusive unless the
//! name says otherwise. Values that do not compare (a `NaN` float) fail every
//! check, since `PartialOrd` reports them as unordered.

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// `value > min`.
///
/// ```rust
/// use keel::predicate::is_greater_than;
///
/// assert!(is_greater_than(&6, &5));
/// assert!(!is_greater_than(&5, &5));
/// ```
#[inline]
pub fn is_greater_than<T: PartialOrd + ?Sized>(value: &T, min: &T) -> bool {
    value > min
}

/// `value >= min`.
#[inline]
pub fn is_greater_than_or_equal_to<T: PartialOrd + ?Sized>(value: &T, min: &T) -> bool {
    value >= min
}

/// `value < end`.
#[inline]
pub fn is_less_than<T: PartialOrd + ?Sized>(value: &T, end: &T) -> bool {
    value < end
}

/// `value <= end`.
#[inline]
pub fn is_less_or_equal_to<T: PartialOrd + ?Sized>(value: &T, end: &T) -> bool {
    value <= end
}

/// `start <= value <= end`.
///
/// An inverted range (`start > end`) admits nothing.
///
/// ```rust
/// use keel::predicate::between;
///
/// assert!(between(&0, &0, &10));
/// assert!(between(&10, &0, &10));
/// assert!(!between(&5, &10, &0));
/// ```
#[inline]
pub fn between<T: PartialOrd + ?Sized>(value: &T, start: &T, end: &T) -> bool {
    start <= value && value <= end
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        is_greater_than(value, &self.0)
    }
}

/// Predicate form of [`is_greater_than`].
///
/// ```rust
/// use keel::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// ```
pub fn gt<T: PartialOrd>(min: T) -> Gt<T> {
    Gt(min)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        is_greater_than_or_equal_to(value, &self.0)
    }
}

/// Predicate form of [`is_greater_than_or_equal_to`].
pub fn ge<T: PartialOrd>(min: T) -> Ge<T> {
    Ge(min)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        is_less_than(value, &self.0)
    }
}

/// Predicate form of [`is_less_than`].
pub fn lt<T: PartialOrd>(end: T) -> Lt<T> {
    Lt(end)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        is_less_or_equal_to(value, &self.0)
    }
}

/// Predicate form of [`is_less_or_equal_to`].
pub fn le<T: PartialOrd>(end: T) -> Le<T> {
    Le(end)
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Within<T> {
    start: T,
    end: T,
}

impl<T: PartialOrd> Predicate<T> for Within<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        between(value, &self.start, &self.end)
    }
}

/// Predicate form of [`between`].
///
/// ```rust
/// use keel::predicate::*;
///
/// let p = within(0, 100);
/// assert!(p.check(&0));
/// assert!(p.check(&100));
/// assert!(!p.check(&101));
/// ```
pub fn within<T: PartialOrd>(start: T, end: T) -> Within<T> {
    Within { start, end }
}
