//! HTML character-reference matching.
//!
//! JSX child text may contain `&name;`, `&#D;`, and `&#xH;` references,
//! which the highlighter marks as escapes.  Only recognition is needed here,
//! never resolution to a code point.

/// Named references recognized in JSX child content.
///
/// Sorted by byte value so [`match_character_reference`] can binary-search.
/// This is the common subset of the HTML named-reference table; unknown
/// names simply fail to match and stay untagged, which is harmless for
/// highlighting.
const NAMED_REFERENCES: [&str; 32] = [
    "amp", "apos", "bull", "cent", "copy", "darr", "deg", "euro", "gt", "hellip", "laquo", "larr",
    "ldquo", "lsquo", "lt", "mdash", "middot", "nbsp", "ndash", "pound", "quot", "raquo", "rarr",
    "rdquo", "reg", "rsquo", "sect", "shy", "times", "trade", "uarr", "yen",
];

/// Matches one character reference at the start of `s`.
///
/// Recognized forms, all requiring the terminating `;`:
///
/// - `&name;` with `name` in [`NAMED_REFERENCES`],
/// - `&#D;` with one or more decimal digits,
/// - `&#xH;` / `&#XH;` with one or more hex digits.
///
/// Returns the full length including `&` and `;`, or 0 when nothing matches.
pub fn match_character_reference(s: &[u8]) -> usize {
    if !s.starts_with(b"&") {
        return 0;
    }
    if s[1..].starts_with(b"#") {
        let (digits_at, is_digit): (usize, fn(&u8) -> bool) =
            match s.get(2) {
                Some(b'x' | b'X') => (3, u8::is_ascii_hexdigit),
                _ => (2, u8::is_ascii_digit),
            };
        let digits = s[digits_at..].iter().take_while(|b| is_digit(*b)).count();
        if digits == 0 {
            return 0;
        }
        return match s.get(digits_at + digits) {
            Some(b';') => digits_at + digits + 1,
            _ => 0,
        };
    }

    let name_length = s[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if name_length == 0 || s.get(1 + name_length) != Some(&b';') {
        return 0;
    }
    let name = &s[1..1 + name_length];
    match NAMED_REFERENCES.binary_search_by(|probe| probe.as_bytes().cmp(name)) {
        Ok(_) => 1 + name_length + 1,
        Err(_) => 0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
