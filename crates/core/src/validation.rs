//! Validation of form input before it reaches the goal store.

use crate::errors::{Result, ValidationError};

/// Trims a goal name and rejects it when nothing is left.
pub fn validate_goal_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok(name.to_string())
}

/// Parses a target amount typed into the creation form.
pub fn parse_target(raw: &str) -> Result<u64> {
    parse_positive_int(raw).ok_or_else(|| ValidationError::InvalidTarget(raw.to_string()).into())
}

/// Parses a contribution amount typed into a goal card.
pub fn parse_positive_amount(raw: &str) -> Result<u64> {
    parse_positive_int(raw).ok_or_else(|| ValidationError::InvalidAmount(raw.to_string()).into())
}

/// Integer-prefix parse: leading whitespace, an optional sign, then ASCII
/// digits up to the first other character. Returns `None` unless the value
/// is strictly positive and fits in a `u64`.
fn parse_positive_int(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: u64 = rest[..digits_len].parse().ok()?;
    if negative || value == 0 {
        return None;
    }
    Some(value)
}
