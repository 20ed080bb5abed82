//! Enumerations with an explicit member table
//!
//! Membership and name lookup go through a static `(name, value)` table built
//! once per type, with no runtime introspection. The [`enumeration!`] macro
//! declares an enum and its table together so the two cannot drift apart.
//!
//! # Example
//!
//! ```
//! use keel::enumeration;
//! use keel::enumeration::Enumeration;
//!
//! enumeration! {
//!     /// Payment channels.
//!     pub enum Channel {
//!         Card,
//!         Transfer,
//!     }
//! }
//!
//! assert_eq!(Channel::from_name("Card"), Some(Channel::Card));
//! assert_eq!(Channel::from_name("Cash"), None);
//! assert_eq!(Channel::Transfer.name(), "Transfer");
//! assert_eq!(Channel::TYPE_NAME, "Channel");
//! ```

/// A fieldless enum with a static member table.
pub trait Enumeration: Copy + PartialEq + core::fmt::Debug + 'static {
    /// Name of the enum type, for messages.
    const TYPE_NAME: &'static str;

    /// Every member with its name, in declaration order.
    fn members() -> &'static [(&'static str, Self)];

    /// Resolve a member by exact (case-sensitive) name.
    fn from_name(name: &str) -> Option<Self> {
        Self::members()
            .iter()
            .find(|(member, _)| *member == name)
            .map(|(_, value)| *value)
    }

    /// Name of this member.
    ///
    /// Empty only if the member table is incomplete, which [`enumeration!`]
    /// rules out.
    fn name(&self) -> &'static str {
        Self::members()
            .iter()
            .find(|(_, value)| value == self)
            .map_or("", |(member, _)| *member)
    }

    /// Whether this value appears in the member table.
    fn is_defined(&self) -> bool {
        Self::members().iter().any(|(_, value)| value == self)
    }
}

/// Whether `value` is present and a member of its enumeration.
///
/// ```
/// use keel::enumeration::is_defined;
/// # keel::enumeration! { enum Side { Buy, Sell } }
///
/// assert!(is_defined(Some(Side::Buy)));
/// assert!(!is_defined(None::<Side>));
/// ```
pub fn is_defined<E: Enumeration>(value: Option<E>) -> bool {
    value.map_or(false, |v| v.is_defined())
}

/// Whether `name` resolves to a member of `E`.
pub fn is_member_name<E: Enumeration>(name: &str) -> bool {
    E::from_name(name).is_some()
}

/// Declare a fieldless enum together with its [`Enumeration`] table.
///
/// Attributes on the enum and its variants are passed through, and the enum
/// gets `Display` by member name.
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enumeration::Enumeration for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn members() -> &'static [(&'static str, Self)] {
                &[ $( (stringify!($variant), $name::$variant) ),+ ]
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::enumeration::Enumeration::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enumeration! {
        enum Light {
            Red,
            Amber,
            Green,
        }
    }

    #[test]
    fn test_members_in_declaration_order() {
        let names: Vec<_> = Light::members().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Red", "Amber", "Green"]);
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Light::from_name("Amber"), Some(Light::Amber));
        assert_eq!(Light::from_name("amber"), None);
        assert_eq!(Light::from_name(""), None);
        assert_eq!(Light::from_name(" Red"), None);
    }

    #[test]
    fn test_name_and_display() {
        assert_eq!(Light::Green.name(), "Green");
        assert_eq!(Light::Red.to_string(), "Red");
        assert_eq!(Light::TYPE_NAME, "Light");
    }

    #[test]
    fn test_is_defined() {
        assert!(Light::Red.is_defined());
        assert!(is_defined(Some(Light::Green)));
        assert!(!is_defined(None::<Light>));
    }

    #[test]
    fn test_is_member_name() {
        assert!(is_member_name::<Light>("Red"));
        assert!(!is_member_name::<Light>("Blue"));
    }
}
