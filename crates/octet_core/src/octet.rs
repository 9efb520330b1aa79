//! Text utilities for single octets.
//!
//! These functions are pure and allocation-free on their fast paths; they are
//! the building blocks for slot mutation and address canonicalization.

use crate::error::OctetError;
use std::borrow::Cow;

/// Largest value a single octet may hold.
pub const OCTET_MAX: u8 = u8::MAX;

/// Maximum number of characters a slot may hold.
pub const OCTET_MAX_LEN: usize = 3;

/// Parse a single octet, reporting why it is not valid.
///
/// Leading and trailing whitespace is ignored. Any non-ASCII-digit character
/// makes the text non-numeric; redundant leading zeros are accepted.
///
/// # Examples
///
/// ```
/// use octet_core::{OctetError, parse_octet};
///
/// assert_eq!(parse_octet(" 192 "), Ok(192));
/// assert_eq!(parse_octet("007"), Ok(7));
/// assert_eq!(parse_octet(""), Err(OctetError::Empty));
/// assert_eq!(parse_octet("1a"), Err(OctetError::NonNumeric));
/// assert_eq!(parse_octet("256"), Err(OctetError::OutOfRange));
/// ```
pub fn parse_octet(text: &str) -> Result<u8, OctetError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(OctetError::Empty);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OctetError::NonNumeric);
    }

    let significant = trimmed.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    // More than three significant digits can never fit, and parsing them
    // could overflow for pathological input.
    if significant.len() > OCTET_MAX_LEN {
        return Err(OctetError::OutOfRange);
    }

    let value: u16 = significant.parse().map_err(|_| OctetError::NonNumeric)?;
    u8::try_from(value).map_err(|_| OctetError::OutOfRange)
}

/// Returns `true` if `text` is a decimal octet in `0..=255`.
///
/// # Examples
///
/// ```
/// use octet_core::is_valid_octet;
///
/// assert!(is_valid_octet("0"));
/// assert!(is_valid_octet(" 255"));
/// assert!(!is_valid_octet("   "));
/// assert!(!is_valid_octet("-1"));
/// assert!(!is_valid_octet("300"));
/// ```
#[inline]
pub fn is_valid_octet(text: &str) -> bool {
    parse_octet(text).is_ok()
}

/// Collapse redundant leading zeros.
///
/// `"007"` becomes `"7"`, `"00"` and `"000"` become `"0"`. Text without a
/// leading zero is returned borrowed and unchanged.
///
/// # Examples
///
/// ```
/// use octet_core::canonicalize_octet;
///
/// assert_eq!(canonicalize_octet("007"), "7");
/// assert_eq!(canonicalize_octet("000"), "0");
/// assert_eq!(canonicalize_octet("0"), "0");
/// assert_eq!(canonicalize_octet("120"), "120");
/// assert_eq!(canonicalize_octet(""), "");
/// ```
pub fn canonicalize_octet(text: &str) -> Cow<'_, str> {
    if text.len() <= 1 || !text.starts_with('0') {
        return Cow::Borrowed(text);
    }

    let stripped = text.trim_start_matches('0');
    if stripped.is_empty() {
        Cow::Borrowed("0")
    } else {
        Cow::Borrowed(stripped)
    }
}

/// Remove every character that is not an ASCII digit.
///
/// Returns a `Cow::Borrowed` if nothing needs to be removed.
///
/// # Examples
///
/// ```
/// use octet_core::sanitize_digits;
///
/// assert_eq!(sanitize_digits("192"), "192");
/// assert_eq!(sanitize_digits("1a9 2"), "192");
/// ```
pub fn sanitize_digits(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(char::is_ascii_digit).collect())
}

/// Keep only ASCII digits and `.` separators.
///
/// Used before splitting a multi-segment payload.
pub fn sanitize_payload(text: &str) -> Cow<'_, str> {
    let keep = |c: char| c.is_ascii_digit() || c == '.';
    if text.chars().all(keep) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|c| keep(*c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_octet_bounds() {
        assert_eq!(parse_octet("0"), Ok(0));
        assert_eq!(parse_octet("255"), Ok(255));
        assert_eq!(parse_octet("256"), Err(OctetError::OutOfRange));
        assert_eq!(parse_octet("999"), Err(OctetError::OutOfRange));
    }

    #[test]
    fn parse_octet_accepts_many_leading_zeros() {
        assert_eq!(parse_octet("0000000001"), Ok(1));
        assert_eq!(parse_octet("0000"), Ok(0));
    }

    #[test]
    fn parse_octet_long_digit_runs_do_not_overflow() {
        let long = "9".repeat(64);
        assert_eq!(parse_octet(&long), Err(OctetError::OutOfRange));
    }

    #[test]
    fn parse_octet_rejects_signs_and_inner_spaces() {
        assert_eq!(parse_octet("+1"), Err(OctetError::NonNumeric));
        assert_eq!(parse_octet("-0"), Err(OctetError::NonNumeric));
        assert_eq!(parse_octet("1 2"), Err(OctetError::NonNumeric));
        assert_eq!(parse_octet("١"), Err(OctetError::NonNumeric));
    }

    #[test]
    fn canonicalize_only_touches_leading_zeros() {
        assert_eq!(canonicalize_octet("00"), "0");
        assert_eq!(canonicalize_octet("010"), "10");
        assert_eq!(canonicalize_octet("100"), "100");
        assert!(matches!(canonicalize_octet("42"), Cow::Borrowed("42")));
    }

    #[test]
    fn sanitize_payload_keeps_separators() {
        assert_eq!(sanitize_payload("10.0.0.1"), "10.0.0.1");
        assert_eq!(sanitize_payload(" 10 . 0\t.0.1\n"), "10.0.0.1");
        assert_eq!(sanitize_payload("ip: 1.2"), "1.2");
    }
}
