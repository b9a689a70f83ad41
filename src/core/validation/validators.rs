//! Reusable field validators

use validator::ValidateLength;

/// Validator: text contains something other than whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validator: character count is between 1 and `max`
pub fn max_chars<T>(value: &T, max: u64) -> bool
where
    T: ValidateLength<u64>,
{
    value.validate_length(Some(1), Some(max), None)
}

/// Validator: a present, non-blank field of at most `max` characters
pub fn bounded_text(value: Option<&String>, max: u64) -> bool {
    value.is_some_and(|text| not_blank(text) && max_chars(text, max))
}
