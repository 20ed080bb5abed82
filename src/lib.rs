//! # Keel
//!
//! Fail-together validation for domain entities.
//!
//! A validator runs every check against an entity, records each violated
//! constraint in a [`ValidationSet`], and raises a single
//! [`ValidationException`] carrying all of them at the boundary. Nothing
//! stops at the first failure.
//!
//! ## Quick Example
//!
//! ```rust
//! use keel::ValidationSet;
//!
//! fn validate_transfer(amount: f64, memo: &str) -> ValidationSet {
//!     let mut set = ValidationSet::new("Invalid transfer");
//!     set.add_greater_than_validation(
//!         &amount,
//!         &0.0,
//!         "'{}' must be greater than {}",
//!         &[&"amount", &0],
//!     )
//!     .add_length_between_validation(
//!         memo,
//!         1,
//!         40,
//!         "'{}' must be {} to {} characters",
//!         &[&"memo", &1, &40],
//!     );
//!     set
//! }
//!
//! assert!(validate_transfer(10.0, "rent").validate_and_throw().is_ok());
//!
//! let err = validate_transfer(-1.0, "").validate_and_throw().unwrap_err();
//! assert_eq!(err.to_string(), "Invalid transfer");
//! assert_eq!(err.failures().len(), 2);
//! assert_eq!(err.failures()[0], "'amount' must be greater than 0");
//! ```
//!
//! ## Layout
//!
//! - [`predicate`]: pure checks over ordered values, text and options.
//! - [`validation`]: the accumulator, its failures and the raised error.
//! - [`template`]: positional `{}` / `{0}` message templates.
//! - [`enumeration`]: reflection-free named enumerations.
//! - [`entity`]: identifiers and the entity base.
//! - [`domain`]: notes, accounts and their validators.
//! - [`testing`]: assertion macros for validators.
//!
//! ## Features
//!
//! - `tracing`: log rejected sets and malformed templates.
//! - `serde`: serialize failures, sets, identifiers and records.
//! - `proptest`: `Arbitrary` for failures and sets.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod domain;
pub mod entity;
pub mod enumeration;
pub mod predicate;
pub mod semigroup;
pub mod template;
pub mod testing;
pub mod validation;

// Re-exports
pub use entity::{DomainEntity, Entity, Identifier};
pub use enumeration::Enumeration;
pub use semigroup::Semigroup;
pub use template::{format_template, TemplateError};
pub use validation::{ValidationException, ValidationFailure, ValidationSet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entity::{DomainEntity, Entity, Identifier};
    pub use crate::enumeration::Enumeration;
    pub use crate::predicate::prelude::*;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{ValidationException, ValidationFailure, ValidationSet};
}
