//! Pure predicates over ordered values, text and optional values
//!
//! Each check exists twice: as a free function (`is_greater_than(&v, &min)`)
//! used by the `add_*_validation` wrappers on
//! [`ValidationSet`](crate::ValidationSet), and as a predicate value (`gt(min)`)
//! that can be passed to
//! [`add_validation_with_condition`](crate::ValidationSet::add_validation_with_condition)
//! and combined with `and`, `or` and `not`.
//!
//! All of them are total over their inputs: no panics, no side effects.
//!
//! # Example
//!
//! ```rust
//! use keel::predicate::*;
//!
//! assert!(is_greater_than_or_equal_to(&3, &3));
//! assert!(!is_not_empty_or_white_space("   "));
//!
//! let valid_code = not_blank().and(len_between(3, 8));
//! assert!(valid_code.check("ACC-01"));
//! assert!(!valid_code.check("AB"));
//! ```

mod combinators;
mod number;
mod presence;
mod string;

pub mod prelude;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use number::{
    between, ge, gt, is_greater_than, is_greater_than_or_equal_to, is_less_or_equal_to,
    is_less_than, le, lt, within, Ge, Gt, Le, Lt, Within,
};

pub use presence::{is_not_none, present, Present};

pub use string::{
    is_not_empty, is_not_empty_or_white_space, len_between, length_between, not_blank, not_empty,
    LenBetween, NotBlank, NotEmpty, Text,
};
