//! Character classification predicates shared by the language scanners.

/// Returns `true` for ES2025 *LineTerminator* code points.
pub fn is_js_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for ES2025 *WhiteSpace* **or** *LineTerminator* characters.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'                      // CHARACTER TABULATION
        | '\x0B'                  // LINE TABULATION
        | '\x0C'                  // FORM FEED
        | ' '                     // SPACE
        | '\u{00A0}'              // NO-BREAK SPACE
        | '\u{FEFF}'              // ZERO WIDTH NO-BREAK SPACE (BOM)
        | '\u{1680}'              // OGHAM SPACE MARK
        | '\u{2000}'
            ..='\u{200A}' // EN QUAD … HAIR SPACE
        | '\u{202F}'              // NARROW NO-BREAK SPACE
        | '\u{205F}'              // MEDIUM MATHEMATICAL SPACE
        | '\u{3000}'              // IDEOGRAPHIC SPACE
        | '\n'
        | '\r'
        | '\u{2028}'
        | '\u{2029}'
    )
}

/// Returns `true` for characters that may *start* a JS identifier.
pub fn is_js_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Returns `true` for characters that may *continue* a JS identifier.
pub fn is_js_identifier_part(c: char) -> bool {
    c == '$' || c == '_' || c == '\u{200C}' || c == '\u{200D}' || c.is_alphanumeric()
}

/// Returns `true` if `c` is a decimal digit (`0` through `9`).
pub fn is_ascii_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is a digit of the given base.
///
/// Digits beyond `9` use the usual letter representation, in either case, so
/// `is_ascii_digit_base(c, 16)` accepts `[0-9a-fA-F]`.
/// `base` must be one of 2, 8, 10, or 16.
pub fn is_ascii_digit_base(c: u8, base: u32) -> bool {
    debug_assert!(matches!(base, 2 | 8 | 10 | 16));
    match base {
        2 => matches!(c, b'0' | b'1'),
        8 => matches!(c, b'0'..=b'7'),
        16 => c.is_ascii_hexdigit(),
        _ => c.is_ascii_digit(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_terminators() {
        for c in ['\n', '\r', '\u{2028}', '\u{2029}'] {
            assert!(is_js_line_terminator(c), "{c:?}");
            assert!(is_js_whitespace(c), "{c:?}");
        }
        assert!(!is_js_line_terminator(' '));
        assert!(!is_js_line_terminator('\u{85}')); // NEL is not a JS terminator
    }

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\x0B', '\x0C', '\u{00A0}', '\u{FEFF}', '\u{3000}'] {
            assert!(is_js_whitespace(c), "{c:?}");
        }
        for c in ['a', '0', '_', '\u{200B}'] {
            assert!(!is_js_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn test_identifier_start_and_part() {
        for c in ['a', 'Z', '$', '_', 'é', '漢'] {
            assert!(is_js_identifier_start(c), "{c:?}");
            assert!(is_js_identifier_part(c), "{c:?}");
        }
        assert!(!is_js_identifier_start('1'));
        assert!(is_js_identifier_part('1'));
        // ZWNJ / ZWJ may continue but not start an identifier.
        assert!(!is_js_identifier_start('\u{200C}'));
        assert!(is_js_identifier_part('\u{200C}'));
        assert!(is_js_identifier_part('\u{200D}'));
        assert!(!is_js_identifier_part('-'));
    }

    #[test]
    fn test_digit_bases() {
        assert!(is_ascii_digit_base(b'1', 2));
        assert!(!is_ascii_digit_base(b'2', 2));
        assert!(is_ascii_digit_base(b'7', 8));
        assert!(!is_ascii_digit_base(b'8', 8));
        assert!(is_ascii_digit_base(b'9', 10));
        assert!(!is_ascii_digit_base(b'a', 10));
        assert!(is_ascii_digit_base(b'f', 16));
        assert!(is_ascii_digit_base(b'F', 16));
        assert!(!is_ascii_digit_base(b'g', 16));
        assert!(is_ascii_digit(b'0'));
        assert!(!is_ascii_digit(b'/'));
    }
}
