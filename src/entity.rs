//! Entity identity
//!
//! An entity is a domain object known by an opaque identifier that never
//! changes once assigned. Identifiers come from a closed set of
//! representations ([`Identifier`]): text, integers, or UUIDs. Each
//! representation has an "unassigned" value (empty text, zero, the nil UUID)
//! used by entities that have not been persisted yet.
//!
//! # Example
//!
//! ```
//! use keel::entity::{DomainEntity, Entity, Identifier};
//! use uuid::Uuid;
//!
//! let fresh: DomainEntity<Uuid> = DomainEntity::unassigned();
//! assert!(fresh.assigned_id().is_none());
//!
//! let stored = DomainEntity::new(42_i64);
//! assert_eq!(stored.id(), &42);
//! assert_eq!(stored.assigned_id(), Some(&42));
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use uuid::Uuid;

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for uuid::Uuid {}
}

/// The identifier representations an entity may use.
///
/// Sealed: implemented for `String`, `i64`, `u64` and `Uuid` only.
pub trait Identifier: sealed::Sealed + Clone + Eq + Hash + Debug {
    /// The placeholder carried by entities that have no identity yet.
    fn unassigned() -> Self;

    /// Whether this is a real identifier rather than the placeholder.
    fn is_assigned(&self) -> bool;
}

impl Identifier for String {
    fn unassigned() -> Self {
        String::new()
    }

    fn is_assigned(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Identifier for i64 {
    fn unassigned() -> Self {
        0
    }

    fn is_assigned(&self) -> bool {
        *self != 0
    }
}

impl Identifier for u64 {
    fn unassigned() -> Self {
        0
    }

    fn is_assigned(&self) -> bool {
        *self != 0
    }
}

impl Identifier for Uuid {
    fn unassigned() -> Self {
        Uuid::nil()
    }

    fn is_assigned(&self) -> bool {
        !self.is_nil()
    }
}

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier representation.
    type Id: Identifier;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Identity holder embedded by concrete entities.
///
/// The id is set at construction and only readable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DomainEntity<Id: Identifier> {
    id: Id,
}

impl<Id: Identifier> DomainEntity<Id> {
    /// Wrap an identifier.
    pub fn new(id: Id) -> Self {
        Self { id }
    }

    /// An entity without identity yet (create path).
    pub fn unassigned() -> Self {
        Self::new(Id::unassigned())
    }

    /// The identifier, or `None` while it is the unassigned placeholder.
    pub fn assigned_id(&self) -> Option<&Id> {
        Some(&self.id).filter(|id| id.is_assigned())
    }
}

impl<Id: Identifier> Entity for DomainEntity<Id> {
    type Id = Id;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// UUID-backed identifier newtype with parsing and conversions.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $vis:vis struct $t:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $t(uuid::Uuid);

        impl $t {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// The wrapped UUID.
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<uuid::Uuid> for $t {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for uuid::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

pub(crate) use uuid_id;
