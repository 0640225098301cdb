//! JSX tag and braced-expression matchers.
//!
//! Deciding whether a `<` in JS code opens a JSX tag requires arbitrary
//! lookahead, so the tag grammar is written once against a consumer
//! interface and exercised twice: a counting consumer for the side-effect
//! free trial parse, and the driver's emitting consumer once the tag has
//! been accepted.

use crate::js::lex::{
    CommentResult, StringLiteralResult, match_block_comment, match_jsx_attribute_name,
    match_jsx_element_name, match_line_comment, match_string_literal, match_whitespace,
};

// ─────────────────────────────────────────────────────────────────────────────
// Results
// ─────────────────────────────────────────────────────────────────────────────

/// The shape of a matched JSX tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsxTagType {
    /// `<div …>`
    #[default]
    Opening,
    /// `</div>`
    Closing,
    /// `<div …/>`
    SelfClosing,
    /// `<>`
    FragmentOpening,
    /// `</>`
    FragmentClosing,
}

impl JsxTagType {
    /// `true` for tags that open a child scope (`<div>`, `<>`).
    pub fn is_opening(self) -> bool {
        matches!(self, JsxTagType::Opening | JsxTagType::FragmentOpening)
    }

    /// `true` for tags that close a child scope (`</div>`, `</>`).
    pub fn is_closing(self) -> bool {
        matches!(self, JsxTagType::Closing | JsxTagType::FragmentClosing)
    }
}

/// Result of a successful JSX tag match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsxTagResult {
    /// Total tag length from `<` through `>`.
    pub length: usize,
    /// What kind of tag was matched.
    pub tag: JsxTagType,
}

/// Result of matching a braced `{…}` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsxBracedResult {
    /// Total matched length; 0 when `s` does not start with `{`.
    pub length: usize,
    /// Whether the balancing `}` was found.
    pub is_terminated: bool,
}

/// Which tags a trial parse accepts.
///
/// When probing for JSX at the JS expression level, a bare closing tag is
/// not a valid start, so the driver trial-parses with [`NonClosing`].
///
/// [`NonClosing`]: JsxTagSubset::NonClosing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxTagSubset {
    /// Accept every tag shape.
    All,
    /// Reject `</…>` and `</>`.
    NonClosing,
}

// ─────────────────────────────────────────────────────────────────────────────
// Consumer interface
// ─────────────────────────────────────────────────────────────────────────────

/// Receiver for the pieces of a JSX tag, invoked in source order.
///
/// Lengths are in bytes, relative to the consumer's own notion of position:
/// the grammar guarantees that the callbacks cover a prefix of the input
/// contiguously, so a consumer only ever appends.
pub(crate) trait JsxTagConsumer {
    fn whitespace(&mut self, length: usize);
    fn block_comment(&mut self, comment: CommentResult);
    fn line_comment(&mut self, length: usize);
    /// The final callback of a successful match.
    fn done(&mut self, tag: JsxTagType);
    fn advance(&mut self, amount: usize);
    fn opening_symbol(&mut self);
    fn closing_symbol(&mut self);
    fn element_name(&mut self, length: usize);
    fn attribute_name(&mut self, length: usize);
    fn attribute_equals(&mut self);
    fn string_literal(&mut self, string: StringLiteralResult);
    fn braced(&mut self, braced: JsxBracedResult);
}

/// Trial-parse consumer: accumulates a length and remembers the tag shape.
#[derive(Debug, Default)]
struct CountingConsumer {
    length: usize,
    tag: JsxTagType,
}

impl JsxTagConsumer for CountingConsumer {
    fn whitespace(&mut self, length: usize) {
        self.length += length;
    }
    fn block_comment(&mut self, comment: CommentResult) {
        self.length += comment.length;
    }
    fn line_comment(&mut self, length: usize) {
        self.length += length;
    }
    fn done(&mut self, tag: JsxTagType) {
        self.tag = tag;
    }
    fn advance(&mut self, amount: usize) {
        self.length += amount;
    }
    fn opening_symbol(&mut self) {
        self.length += 1;
    }
    fn closing_symbol(&mut self) {
        self.length += 1;
    }
    fn element_name(&mut self, length: usize) {
        self.length += length;
    }
    fn attribute_name(&mut self, length: usize) {
        self.length += length;
    }
    fn attribute_equals(&mut self) {
        self.length += 1;
    }
    fn string_literal(&mut self, string: StringLiteralResult) {
        self.length += string.length;
    }
    fn braced(&mut self, braced: JsxBracedResult) {
        self.length += braced.length;
    }
}

/// Couples a consumer with the unconsumed remainder of the input, so the
/// grammar below can report a piece and step past it in one call.
struct Cursor<'c, 's, C: JsxTagConsumer> {
    out: &'c mut C,
    s: &'s [u8],
}

impl<'c, 's, C: JsxTagConsumer> Cursor<'c, 's, C> {
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let whitespace = match_whitespace(self.s);
            if whitespace != 0 {
                self.out.whitespace(whitespace);
                self.s = &self.s[whitespace..];
                continue;
            }
            let block = match_block_comment(self.s);
            if block.length != 0 {
                self.out.block_comment(block);
                self.s = &self.s[block.length..];
                continue;
            }
            let line = match_line_comment(self.s);
            if line != 0 {
                self.out.line_comment(line);
                self.s = &self.s[line..];
                continue;
            }
            break;
        }
    }

    fn opening_symbol(&mut self) {
        self.out.opening_symbol();
        self.s = &self.s[1..];
    }

    fn closing_symbol(&mut self) {
        self.out.closing_symbol();
        self.s = &self.s[1..];
    }

    fn element_name(&mut self, length: usize) {
        self.out.element_name(length);
        self.s = &self.s[length..];
    }

    fn attribute_name(&mut self, length: usize) {
        self.out.attribute_name(length);
        self.s = &self.s[length..];
    }

    fn attribute_equals(&mut self) {
        self.out.attribute_equals();
        self.s = &self.s[1..];
    }

    fn string_literal(&mut self, string: StringLiteralResult) {
        self.out.string_literal(string);
        self.s = &self.s[string.length..];
    }

    fn braced(&mut self, braced: JsxBracedResult) {
        self.out.braced(braced);
        self.s = &self.s[braced.length..];
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Braced expressions
// ─────────────────────────────────────────────────────────────────────────────

/// Matches a brace-balanced `{…}` span, skipping over string literals and
/// comments so braces inside them do not count.
pub fn match_jsx_braced(s: &[u8]) -> JsxBracedResult {
    if !s.starts_with(b"{") {
        return JsxBracedResult::default();
    }
    let mut length = 1;
    let mut level = 1usize;

    while length < s.len() {
        length += match_whitespace_comment_sequence(&s[length..]);
        if length >= s.len() {
            break;
        }
        match s[length] {
            b'{' => {
                level += 1;
                length += 1;
            }
            b'}' => {
                length += 1;
                level -= 1;
                if level == 0 {
                    return JsxBracedResult {
                        length,
                        is_terminated: true,
                    };
                }
            }
            b'\'' | b'"' => {
                let string = match_string_literal(&s[length..]);
                length += if string.length != 0 { string.length } else { 1 };
            }
            _ => length += 1,
        }
    }
    JsxBracedResult {
        length: s.len(),
        is_terminated: false,
    }
}

/// Counts one run of whitespace and comments.
fn match_whitespace_comment_sequence(s: &[u8]) -> usize {
    let mut counter = CountingConsumer::default();
    let mut cursor = Cursor {
        out: &mut counter,
        s,
    };
    cursor.skip_whitespace_and_comments();
    counter.length
}

// ─────────────────────────────────────────────────────────────────────────────
// Tags
// ─────────────────────────────────────────────────────────────────────────────

/// Runs the tag grammar against `consumer`.
///
/// Returns `true` on acceptance; the consumer then has received every piece
/// of the tag followed by exactly one `done` call.  On rejection the
/// consumer may have received a partial tag, so side-effecting consumers
/// must only be used after a successful trial parse.
pub(crate) fn match_jsx_tag_with<C: JsxTagConsumer>(
    consumer: &mut C,
    s: &[u8],
    subset: JsxTagSubset,
) -> bool {
    if !s.starts_with(b"<") {
        return false;
    }

    let mut cur = Cursor { out: consumer, s };

    cur.opening_symbol();
    cur.skip_whitespace_and_comments();

    if cur.s.starts_with(b">") {
        cur.closing_symbol();
        cur.out.done(JsxTagType::FragmentOpening);
        return true;
    }
    let mut closing = false;
    if cur.s.starts_with(b"/") {
        if subset == JsxTagSubset::NonClosing {
            return false;
        }
        closing = true;
        cur.closing_symbol();
        cur.skip_whitespace_and_comments();
        if cur.s.starts_with(b">") {
            cur.closing_symbol();
            cur.out.done(JsxTagType::FragmentClosing);
            return true;
        }
    }
    let name_length = match_jsx_element_name(cur.s);
    if name_length != 0 {
        cur.element_name(name_length);
    }

    while !cur.s.is_empty() {
        cur.skip_whitespace_and_comments();
        if cur.s.starts_with(b">") {
            cur.closing_symbol();
            cur.out.done(if closing {
                JsxTagType::Closing
            } else {
                JsxTagType::Opening
            });
            return true;
        }
        if cur.s.starts_with(b"/>") {
            if closing {
                return false;
            }
            cur.closing_symbol();
            cur.closing_symbol();
            cur.out.done(JsxTagType::SelfClosing);
            return true;
        }
        // A spread attribute, `{...props}`.
        let spread = match_jsx_braced(cur.s);
        if spread.length != 0 {
            if !spread.is_terminated {
                return false;
            }
            cur.braced(spread);
            continue;
        }
        let attribute_length = match_jsx_attribute_name(cur.s);
        if attribute_length != 0 {
            cur.attribute_name(attribute_length);
            cur.skip_whitespace_and_comments();
            if !cur.s.starts_with(b"=") {
                continue;
            }
            cur.attribute_equals();
            cur.skip_whitespace_and_comments();
            let string = match_string_literal(cur.s);
            if string.length != 0 {
                cur.string_literal(string);
                continue;
            }
            let braced = match_jsx_braced(cur.s);
            if braced.length != 0 {
                if !braced.is_terminated {
                    return false;
                }
                cur.braced(braced);
                continue;
            }
            // JSX technically allows an element or fragment as an attribute
            // value.  Supporting that would require recursive tag parsing
            // right here; mainstream highlighters skip it and so do we.
        }
        break;
    }

    false
}

/// Trial-parses one JSX tag, accepting any tag shape.
pub fn match_jsx_tag(s: &[u8]) -> Option<JsxTagResult> {
    match_jsx_tag_in(s, JsxTagSubset::All)
}

/// Trial-parses one JSX tag from the given subset.
pub fn match_jsx_tag_in(s: &[u8], subset: JsxTagSubset) -> Option<JsxTagResult> {
    let mut counter = CountingConsumer::default();
    if match_jsx_tag_with(&mut counter, s, subset) {
        Some(JsxTagResult {
            length: counter.length,
            tag: counter.tag,
        })
    } else {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &[u8]) -> Option<(usize, JsxTagType)> {
        match_jsx_tag(s).map(|r| (r.length, r.tag))
    }

    // ── Braced expressions ───────────────────────────────────────────────────

    #[test]
    fn test_braced_simple() {
        assert_eq!(
            match_jsx_braced(b"{x}"),
            JsxBracedResult {
                length: 3,
                is_terminated: true
            }
        );
        assert_eq!(
            match_jsx_braced(b"{}"),
            JsxBracedResult {
                length: 2,
                is_terminated: true
            }
        );
        assert_eq!(match_jsx_braced(b"x{}"), JsxBracedResult::default());
    }

    #[test]
    fn test_braced_nesting_and_strings() {
        assert_eq!(match_jsx_braced(b"{f({a: 1})} tail").length, 11);
        // Braces inside string literals do not count.
        assert_eq!(
            match_jsx_braced(b"{'}'}"),
            JsxBracedResult {
                length: 5,
                is_terminated: true
            }
        );
        // Braces inside comments do not count either.
        assert_eq!(
            match_jsx_braced(b"{/* } */}"),
            JsxBracedResult {
                length: 9,
                is_terminated: true
            }
        );
    }

    #[test]
    fn test_braced_unterminated() {
        assert_eq!(
            match_jsx_braced(b"{x"),
            JsxBracedResult {
                length: 2,
                is_terminated: false
            }
        );
        assert_eq!(
            match_jsx_braced(b"{{x}"),
            JsxBracedResult {
                length: 4,
                is_terminated: false
            }
        );
    }

    // ── Tags ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_tag_shapes() {
        assert_eq!(tag(b"<div>"), Some((5, JsxTagType::Opening)));
        assert_eq!(tag(b"</div>"), Some((6, JsxTagType::Closing)));
        assert_eq!(tag(b"<div/>"), Some((6, JsxTagType::SelfClosing)));
        assert_eq!(tag(b"<>"), Some((2, JsxTagType::FragmentOpening)));
        assert_eq!(tag(b"</>"), Some((3, JsxTagType::FragmentClosing)));
        // Whitespace inside the tag is free.
        assert_eq!(tag(b"< div >"), Some((7, JsxTagType::Opening)));
        assert_eq!(tag(b"</ >"), Some((4, JsxTagType::FragmentClosing)));
    }

    #[test]
    fn test_tag_attributes() {
        assert_eq!(tag(b"<div a=\"1\"/>"), Some((12, JsxTagType::SelfClosing)));
        assert_eq!(tag(b"<div a={x}>"), Some((11, JsxTagType::Opening)));
        // Bare attribute without a value.
        assert_eq!(tag(b"<input disabled>"), Some((16, JsxTagType::Opening)));
        // Spread attribute.
        assert_eq!(tag(b"<div {...props}>"), Some((16, JsxTagType::Opening)));
        // Dashed and namespaced names.
        assert_eq!(
            tag(b"<svg:rect data-id=\"r\"/>"),
            Some((23, JsxTagType::SelfClosing))
        );
        // Comments are allowed between tag pieces.
        assert_eq!(
            tag(b"<div /*c*/ a=\"1\">"),
            Some((17, JsxTagType::Opening))
        );
    }

    #[test]
    fn test_tag_rejections() {
        assert_eq!(tag(b"<"), None);
        assert_eq!(tag(b"< "), None);
        assert_eq!(tag(b"<1>"), None);
        // Relational expression, not a tag.
        assert_eq!(tag(b"<a +"), None);
        // Closing tag cannot be self-closing.
        assert_eq!(tag(b"</div/>"), None);
        // Attribute with `=` but no value.
        assert_eq!(tag(b"<div a=>"), None);
        // Unterminated braced value.
        assert_eq!(tag(b"<div a={x>"), None);
        // Unterminated input.
        assert_eq!(tag(b"<div a=\"1\""), None);
    }

    #[test]
    fn test_tag_subset_non_closing() {
        assert_eq!(
            match_jsx_tag_in(b"<div>", JsxTagSubset::NonClosing).map(|r| r.tag),
            Some(JsxTagType::Opening)
        );
        assert_eq!(match_jsx_tag_in(b"</div>", JsxTagSubset::NonClosing), None);
        assert_eq!(match_jsx_tag_in(b"</>", JsxTagSubset::NonClosing), None);
        // Fragment openings stay accepted.
        assert_eq!(
            match_jsx_tag_in(b"<>", JsxTagSubset::NonClosing).map(|r| r.tag),
            Some(JsxTagType::FragmentOpening)
        );
    }

    #[test]
    fn test_tag_type_predicates() {
        assert!(JsxTagType::Opening.is_opening());
        assert!(JsxTagType::FragmentOpening.is_opening());
        assert!(JsxTagType::Closing.is_closing());
        assert!(JsxTagType::FragmentClosing.is_closing());
        assert!(!JsxTagType::SelfClosing.is_opening());
        assert!(!JsxTagType::SelfClosing.is_closing());
    }
}
