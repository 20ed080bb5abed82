//! Core predicate trait and logical combinators
//!
//! The free functions in this crate answer one question about one value. The
//! [`Predicate`] trait packages such a question as a value so it can be handed
//! to [`ValidationSet::add_validation_with_condition`](crate::ValidationSet::add_validation_with_condition)
//! or combined with others.

/// A reusable check over values of type `T`.
///
/// Closures of shape `Fn(&T) -> bool` are predicates, so ad-hoc checks need no
/// wrapper type.
///
/// # Example
///
/// ```rust
/// use keel::predicate::*;
///
/// let in_percent_range = ge(0).and(le(100));
/// assert!(in_percent_range.check(&42));
/// assert!(!in_percent_range.check(&101));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// # Example
///
/// ```rust
/// use keel::predicate::*;
///
/// let outside = gt(0).and(lt(100)).not();
/// assert!(outside.check(&-5));
/// assert!(!outside.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate holds.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
