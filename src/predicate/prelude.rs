//! Predicate prelude for convenient imports
//!
//! ```rust
//! use keel::predicate::prelude::*;
//!
//! let percent = ge(0).and(le(100));
//! assert!(percent.check(&25));
//! ```

pub use super::combinators::{Predicate, PredicateExt};

pub use super::number::{
    between, ge, gt, is_greater_than, is_greater_than_or_equal_to, is_less_or_equal_to,
    is_less_than, le, lt, within,
};

pub use super::presence::{is_not_none, present};

pub use super::string::{
    is_not_empty, is_not_empty_or_white_space, len_between, length_between, not_blank, not_empty,
    Text,
};
