//! Minimal UTF-8 decoding for the byte-level scanners.
//!
//! The scanners operate on raw byte slices so that malformed input can be
//! reported in-band instead of failing the whole run.  This module decodes
//! exactly one code point at a time; std does the validity checking.

/// A decoded code point together with the number of bytes it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar {
    /// The decoded Unicode scalar value.
    pub code_point: char,
    /// Encoded length in bytes, in `1..=4`.
    pub length: usize,
}

/// Decodes the first code point of `s`.
///
/// Returns `None` for empty input and for any invalid UTF-8 sequence
/// (truncated sequences, overlong encodings, surrogates, stray continuation
/// bytes).  The driver turns a `None` into a one-byte `error` token.
pub fn decode_and_length(s: &[u8]) -> Option<DecodedChar> {
    let first = *s.first()?;
    let length = match first {
        0x00..=0x7f => {
            return Some(DecodedChar {
                code_point: first as char,
                length: 1,
            });
        }
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return None,
    };
    if s.len() < length {
        return None;
    }
    let decoded = core::str::from_utf8(&s[..length]).ok()?;
    let code_point = decoded.chars().next()?;
    Some(DecodedChar { code_point, length })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &[u8]) -> Option<(char, usize)> {
        decode_and_length(s).map(|d| (d.code_point, d.length))
    }

    #[test]
    fn test_decode_ascii() {
        assert_eq!(decode(b"a"), Some(('a', 1)));
        assert_eq!(decode(b"\x00rest"), Some(('\0', 1)));
        assert_eq!(decode(b"\x7f"), Some(('\x7f', 1)));
    }

    #[test]
    fn test_decode_multibyte() {
        assert_eq!(decode("é".as_bytes()), Some(('é', 2)));
        assert_eq!(decode("漢字".as_bytes()), Some(('漢', 3)));
        assert_eq!(decode("\u{2028}".as_bytes()), Some(('\u{2028}', 3)));
        assert_eq!(decode("🦀!".as_bytes()), Some(('🦀', 4)));
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(decode(b""), None);
        // Stray continuation byte.
        assert_eq!(decode(b"\x80"), None);
        // Truncated two-byte sequence.
        assert_eq!(decode(b"\xc3"), None);
        // Overlong encoding of '/'.
        assert_eq!(decode(b"\xc0\xaf"), None);
        // CESU-8 style surrogate half.
        assert_eq!(decode(b"\xed\xa0\x80"), None);
        // First byte beyond U+10FFFF.
        assert_eq!(decode(b"\xf5\x80\x80\x80"), None);
    }
}
