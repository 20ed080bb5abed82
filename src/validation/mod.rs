//! Validation sets, failures and the boundary exception
//!
//! - [`ValidationFailure`]: one violated constraint.
//! - [`ValidationSet`]: the ordered, fail-together accumulator.
//! - [`ValidationException`]: what a non-empty set turns into when raised.

mod exception;
mod failure;
mod set;

pub use exception::ValidationException;
pub use failure::ValidationFailure;
pub use set::ValidationSet;
