//! Numeric and byte literal parsing.
//!
//! Numbers follow the familiar C convention: `0x`/`0X` (or `\x`/`\X`) for
//! hexadecimal, a leading `0` for octal, decimal otherwise. Byte literals add
//! single characters and backslash escapes on top of that.

use crate::error::{PatchError, PatchResult};
use std::num::IntErrorKind;

/// Returns the digits following a `0x`, `0X`, `\x` or `\X` prefix.
///
/// The prefix only counts when at least one character follows it.
fn strip_hex_prefix(s: &str) -> Option<&str> {
    match s.as_bytes() {
        [b'0' | b'\\', b'x' | b'X', _, ..] => Some(&s[2..]),
        _ => None,
    }
}

/// Parses `digits` in `radix`, requiring the whole string to be digits.
///
/// Signs are only accepted for decimal input.
fn parse_radix(arg: &str, digits: &str, radix: u32) -> PatchResult<i64> {
    let unsigned = digits.strip_prefix(['+', '-']).unwrap_or(digits);
    let signed_ok = radix == 10 || unsigned.len() == digits.len();
    if !signed_ok || unsigned.is_empty() || !unsigned.chars().all(|c| c.is_digit(radix)) {
        return Err(PatchError::InvalidNumber { arg: arg.to_string() });
    }

    i64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PatchError::NumberOverflow {
            arg: arg.to_string(),
        },
        _ => PatchError::InvalidNumber { arg: arg.to_string() },
    })
}

/// Parses a decimal, octal (`0` prefix) or hexadecimal (`0x`/`\x` prefix) number.
///
/// # Errors
///
/// Returns [`PatchError::InvalidNumber`] if any character is invalid for the
/// selected base and [`PatchError::NumberOverflow`] if the value does not fit
/// an `i64`.
///
/// # Example
///
/// ```rust
/// use bytepatch_core::parse_number;
///
/// assert_eq!(parse_number("\\x1F").unwrap(), 31);
/// assert_eq!(parse_number("017").unwrap(), 15);
/// assert_eq!(parse_number("17").unwrap(), 17);
/// ```
pub fn parse_number(arg: &str) -> PatchResult<i64> {
    if let Some(digits) = strip_hex_prefix(arg) {
        parse_radix(arg, digits, 16)
    } else if arg.len() > 1 && arg.starts_with('0') {
        parse_radix(arg, &arg[1..], 8)
    } else {
        parse_radix(arg, arg, 10)
    }
}

fn in_byte_range(arg: &str, value: i64) -> PatchResult<u8> {
    u8::try_from(value).map_err(|_| PatchError::ByteOutOfRange {
        arg: arg.to_string(),
        value,
    })
}

fn control_code(escape: u8) -> Option<u8> {
    let code = match escape {
        b'n' => b'\n',
        b't' => b'\t',
        b'r' => b'\r',
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'v' => 0x0B,
        b'e' => 0x1B,
        _ => return None,
    };
    Some(code)
}

/// Parses a single byte value.
///
/// Accepted forms, checked in order:
///
/// 1. a single character, taken literally (`A` is 65)
/// 2. hexadecimal with a `0x` or `\x` prefix
/// 3. a named control escape: `\n \t \r \a \b \f \v \e`
/// 4. a backslash followed by a decimal number (`\65`)
///
/// # Errors
///
/// Returns [`PatchError::InvalidByte`] for anything else (including bare
/// octal or decimal numbers such as `0101` or `65`),
/// [`PatchError::ByteOutOfRange`] when the number does not fit in a byte, and
/// the numeric parse errors of [`parse_number`] for malformed digits.
pub fn parse_byte(arg: &str) -> PatchResult<u8> {
    let bytes = arg.as_bytes();

    if let [only] = bytes {
        return Ok(*only);
    }

    if let Some(digits) = strip_hex_prefix(arg) {
        return in_byte_range(arg, parse_radix(arg, digits, 16)?);
    }

    if let Some(rest) = arg.strip_prefix('\\') {
        if let [escape] = rest.as_bytes() {
            if let Some(code) = control_code(*escape) {
                return Ok(code);
            }
        }
        return in_byte_range(arg, parse_radix(arg, rest, 10)?);
    }

    Err(PatchError::InvalidByte { arg: arg.to_string() })
}
