//! Domain entities and their validators
//!
//! Each entity validates itself on construction and update: it builds a
//! [`ValidationSet`](crate::ValidationSet) through its validator and raises it
//! straight away, so an entity value that exists has passed its checks.

pub mod accounts;
pub mod messages;
pub mod notes;

pub use accounts::{Account, AccountId};
pub use notes::{Note, NoteId, NoteRecord, NoteType};
