//! Text helpers shared by the entity types.

/// Returns `true` if the value is empty or contains only whitespace.
///
/// Whitespace follows the Unicode `White_Space` property, so non-breaking
/// spaces and tabs count as blank as well.
///
/// ```
/// use order_desk_core::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank(" a "));
/// ```
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
