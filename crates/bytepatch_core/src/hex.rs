//! Hex string decoding.

use crate::error::{PatchError, PatchResult};

/// Whitespace as understood by C's `isspace`, which unlike
/// [`u8::is_ascii_whitespace`] includes vertical tab.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Decodes a hex string into bytes.
///
/// Whitespace anywhere in the input is ignored and digits are paired from
/// left to right. A trailing unpaired digit becomes a byte of its own, so
/// `"abc"` decodes to `[0xAB, 0x0C]`.
///
/// # Errors
///
/// Returns [`PatchError::InvalidHexDigit`] on the first character that is
/// neither whitespace nor a hex digit.
pub fn decode_hex(input: &str) -> PatchResult<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() / 2 + 1);
    let mut pending: Option<u8> = None;

    for byte in input.bytes() {
        if is_space(byte) {
            continue;
        }

        let value = nibble(byte).ok_or(PatchError::InvalidHexDigit { found: byte })?;

        match pending.take() {
            Some(high) => out.push((high << 4) | value),
            None => pending = Some(value),
        }
    }

    if let Some(low) = pending {
        out.push(low);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_plain() {
        assert_eq!(decode_hex("deadbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn decode_ignores_whitespace() {
        assert_eq!(
            decode_hex("de ad be ef").unwrap(),
            decode_hex("deadbeef").unwrap()
        );
        assert_eq!(
            decode_hex("\td\ne\x0Bad\rbe\x0Cef ").unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
        // pairing ignores where the whitespace falls
        assert_eq!(decode_hex("d ea d").unwrap(), vec![0xDE, 0xAD]);
    }

    #[test]
    fn decode_odd_trailing_digit() {
        assert_eq!(decode_hex("a").unwrap(), vec![0x0A]);
        assert_eq!(decode_hex("ABC").unwrap(), vec![0xAB, 0x0C]);
    }

    #[test]
    fn decode_empty_and_blank() {
        assert!(decode_hex("").unwrap().is_empty());
        assert!(decode_hex("   ").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_non_hex() {
        assert!(matches!(
            decode_hex("zz"),
            Err(PatchError::InvalidHexDigit { found: b'z' })
        ));
        assert!(matches!(
            decode_hex("0x12"),
            Err(PatchError::InvalidHexDigit { found: b'x' })
        ));
        assert!(matches!(
            decode_hex("12\x01"),
            Err(PatchError::InvalidHexDigit { found: 0x01 })
        ));
    }

    proptest! {
        #[test]
        fn decode_lowercase_and_uppercase_agree(data in prop::collection::vec(any::<u8>(), 0..64)) {
            let lower: String = data.iter().map(|b| format!("{b:02x}")).collect();
            let upper: String = data.iter().map(|b| format!("{b:02X} ")).collect();
            prop_assert_eq!(decode_hex(&lower).unwrap(), data.clone());
            prop_assert_eq!(decode_hex(&upper).unwrap(), data);
        }
    }
}
