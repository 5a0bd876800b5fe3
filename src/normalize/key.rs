//! Normalized keys for case-insensitive title comparison.
//!
//! Rules:
//! - The key is the Unicode lower-case form of the raw title.
//! - No trimming. Empty and whitespace-only titles are ordinary titles.
//! - Keys are used for equality and grouping only, never returned in place
//!   of the original text.

/// Lower-case a title into its grouping key.
#[inline]
pub fn normalized_key(title: &str) -> String {
    title.to_lowercase()
}

/// Returns true if both titles share the same normalized key.
///
/// ASCII input is compared without allocating.
#[inline]
pub fn titles_equal(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    normalized_key(a) == normalized_key(b)
}
