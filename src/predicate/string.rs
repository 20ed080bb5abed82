//! Text predicates
//!
//! Every check here accepts any [`Text`] value, which covers `str`, `String`,
//! `Cow<str>`, references to those, and `Option`s of them. An absent value
//! (`None`) is treated as empty text: it fails every check, it never panics.
//!
//! Lengths are counted in Unicode scalar values (`char`s), not bytes, so
//! `"héllo"` has length 5.
//!
//! The predicate values (`not_empty()`, `not_blank()`, `len_between()`) check
//! `str` only, so they chain with `and`/`or`/`not` without annotations. Pass
//! `String`s with `as_str()`; optional text goes through the free functions.

use std::borrow::Cow;

use super::combinators::Predicate;

/// Something that may hold a piece of text.
pub trait Text {
    /// The text, or `None` when the value is absent.
    fn as_text(&self) -> Option<&str>;
}

impl Text for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Text for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Text + ?Sized> Text for &T {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: Text> Text for Option<T> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|text| text.as_text())
    }
}

/// `start <= chars(text) <= end`. Absent text is never in range.
///
/// ```rust
/// use keel::predicate::length_between;
///
/// assert!(length_between("", 0, 0));
/// assert!(!length_between("ab", 1, 1));
/// assert!(length_between("héllo", 5, 5));
/// ```
pub fn length_between<T: Text + ?Sized>(text: &T, start: usize, end: usize) -> bool {
    text.as_text().map_or(false, |s| {
        let len = s.chars().count();
        start <= len && len <= end
    })
}

/// Text is present and has at least one character.
///
/// ```rust
/// use keel::predicate::is_not_empty;
///
/// assert!(is_not_empty("a"));
/// assert!(!is_not_empty(""));
/// assert!(!is_not_empty(&None::<String>));
/// ```
pub fn is_not_empty<T: Text + ?Sized>(text: &T) -> bool {
    text.as_text().map_or(false, |s| !s.is_empty())
}

/// Text is present and holds at least one non-whitespace character.
///
/// ```rust
/// use keel::predicate::is_not_empty_or_white_space;
///
/// assert!(is_not_empty_or_white_space(" a "));
/// assert!(!is_not_empty_or_white_space("   "));
/// assert!(!is_not_empty_or_white_space(""));
/// ```
pub fn is_not_empty_or_white_space<T: Text + ?Sized>(text: &T) -> bool {
    text.as_text()
        .map_or(false, |s| s.chars().any(|c| !c.is_whitespace()))
}

/// Predicate form of [`is_not_empty`].
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        is_not_empty(value)
    }
}

/// Create a predicate that checks text is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate form of [`is_not_empty_or_white_space`].
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        is_not_empty_or_white_space(value)
    }
}

/// Create a predicate that checks text is neither empty nor whitespace.
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate form of [`length_between`].
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        length_between(value, self.min, self.max)
    }
}

/// Create a predicate that checks text length is between min and max (inclusive).
///
/// ```rust
/// use keel::predicate::*;
///
/// let p = len_between(3, 10);
/// assert!(!p.check("ab"));
/// assert!(p.check("abc"));
/// assert!(p.check("1234567890"));
/// assert!(!p.check("12345678901"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_length_between_boundaries() {
        assert!(length_between("", 0, 0));
        assert!(!length_between("ab", 1, 1));
        assert!(length_between("ab", 2, 2));
        assert!(length_between("ab", 0, 5));
        assert!(!length_between("abcdef", 0, 5));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 'é' is two bytes in UTF-8
        assert_eq!("é".len(), 2);
        assert!(length_between("é", 1, 1));
        assert!(!length_between("é", 2, 2));
    }

    #[test]
    fn test_absent_text_is_empty() {
        let missing: Option<String> = None;
        assert!(!is_not_empty(&missing));
        assert!(!is_not_empty_or_white_space(&missing));
        assert!(!length_between(&missing, 0, 10));
    }

    #[test]
    fn test_present_optional_text() {
        let present = Some("note");
        assert!(is_not_empty(&present));
        assert!(is_not_empty_or_white_space(&present));
        assert!(length_between(&present, 4, 4));
    }

    #[test]
    fn test_whitespace_variants() {
        assert!(!is_not_empty_or_white_space("   "));
        assert!(!is_not_empty_or_white_space("\t\n"));
        assert!(!is_not_empty_or_white_space("\u{00a0}"));
        assert!(is_not_empty_or_white_space(" a "));
        assert!(is_not_empty("   "));
    }

    #[test]
    fn test_owned_and_cow_text() {
        assert!(is_not_empty(&String::from("x")));
        assert!(is_not_empty(&Cow::Borrowed("x")));
        assert!(!is_not_empty(&Cow::<str>::Owned(String::new())));
    }

    #[test]
    fn test_predicate_forms() {
        assert!(not_empty().check("a"));
        assert!(!not_empty().check(""));
        assert!(not_blank().check(String::from(" b").as_str()));
        assert!(!not_blank().check("\t"));
        assert!(len_between(1, 3).check("abc"));
        assert!(!len_between(1, 3).check("abcd"));
    }

    #[test]
    fn test_predicate_forms_chain() {
        let code = not_blank().and(len_between(2, 4));
        assert!(code.check("ab"));
        assert!(!code.check("  "));
        assert!(!code.check("abcde"));

        let empty_or_long = not_empty().not().or(len_between(3, 10));
        assert!(empty_or_long.check(""));
        assert!(!empty_or_long.check("ab"));
    }
}
