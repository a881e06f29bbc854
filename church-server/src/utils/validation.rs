//! Input validation helpers
//!
//! Presence checks treat an empty string exactly like an absent field,
//! matching what the portal and chatbot frontends send for untouched
//! inputs. Whitespace-only strings count as present.

/// True when a required field is absent or the empty string.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Clone out a required field, treating blank as missing.
pub fn required(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}
