//! The JavaScript/JSX highlighting driver.
//!
//! A single-pass, left-to-right scanner over a raw byte buffer.  The driver
//! owns all cross-token state — the scan position, the regex/divide
//! disambiguation flag, the start-of-file flag, and the JSX child depth —
//! and dispatches to the pure matchers in [`lex`](crate::js::lex) and
//! [`jsx`](crate::js::jsx).  Everything else (template substitutions, JSX
//! recursion) lives in the call stack.

use crate::chars::is_js_identifier_part;
use crate::error::{GlintError, GlintResult};
use crate::html;
use crate::js::jsx::{
    JsxBracedResult, JsxTagConsumer, JsxTagSubset, JsxTagType, match_jsx_braced, match_jsx_tag,
    match_jsx_tag_in, match_jsx_tag_with,
};
use crate::js::lex::{
    CommentResult, StringLiteralResult, match_block_comment, match_hashbang_comment,
    match_identifier, match_line_comment, match_line_continuation, match_numeric_literal,
    match_operator_or_punctuation, match_private_identifier, match_string_literal,
    match_whitespace,
};
use crate::js::tokens::TokenType;
use crate::token::{HighlightKind, HighlightOptions, Token, TokenSink};
use crate::utf8::decode_and_length;

// ─────────────────────────────────────────────────────────────────────────────
// Highlighter
// ─────────────────────────────────────────────────────────────────────────────

/// Shared JS and JSX highlighter implementation.
pub(crate) struct Highlighter<'s, 'o, S: TokenSink> {
    out: &'o mut S,
    source: &'s [u8],
    options: HighlightOptions,
    /// Whether a `/` at the current position opens a regular-expression
    /// literal rather than a division operator.  Updated after every emitted
    /// token; its value depends on the most recent one, which is why the
    /// matchers never touch it.
    can_be_regex: bool,
    /// One-shot flag, cleared after the first non-whitespace decision.
    at_start_of_file: bool,
    /// Current JSX child-nesting depth while consuming children.
    jsx_depth: i32,
    /// Depth of plain `{`/`}` pairs seen by the top-level loop; a closer at
    /// depth zero is noise, not punctuation.
    brace_depth: usize,
    index: usize,
    sink_full: bool,
}

impl<'s, 'o, S: TokenSink> Highlighter<'s, 'o, S> {
    pub(crate) fn new(out: &'o mut S, source: &'s [u8], options: HighlightOptions) -> Self {
        Self {
            out,
            source,
            options,
            can_be_regex: true,
            at_start_of_file: true,
            jsx_depth: 0,
            brace_depth: 0,
            index: 0,
            sink_full: false,
        }
    }

    // ── Emission ────────────────────────────────────────────────────────────

    fn emit(&mut self, begin: usize, length: usize, kind: HighlightKind) {
        debug_assert!(length != 0);
        debug_assert!(begin < self.source.len());
        debug_assert!(begin + length <= self.source.len());

        if self.sink_full {
            return;
        }
        if self.options.coalescing
            && let Some(last) = self.out.last_mut()
            && last.kind == kind
            && last.end() as usize == begin
        {
            last.length += length as u32;
            return;
        }
        let accepted = self.out.push(Token {
            begin: begin as u32,
            length: length as u32,
            kind,
        });
        if !accepted {
            self.sink_full = true;
        }
    }

    fn emit_and_advance(&mut self, length: usize, kind: HighlightKind) {
        self.emit(self.index, length, kind);
        self.advance(length);
    }

    fn advance(&mut self, amount: usize) {
        self.index += amount;
        debug_assert!(self.index <= self.source.len());
    }

    fn remainder(&self) -> &'s [u8] {
        &self.source[self.index..]
    }

    // ── Main loop ───────────────────────────────────────────────────────────

    pub(crate) fn run(mut self) -> GlintResult<()> {
        while self.index < self.source.len() {
            if self.skip_whitespace() {
                continue;
            }
            if self.at_start_of_file {
                let matched = self.scan_hashbang_comment();
                self.at_start_of_file = false;
                if matched {
                    continue;
                }
            }

            if self.scan_line_comment()
                || self.scan_block_comment()
                || self.scan_jsx_in_js()
                || self.scan_string_literal()
                || self.scan_template()
                || self.scan_regex()
                || self.scan_numeric_literal()
                || self.scan_private_identifier()
                || self.scan_identifier_or_keyword()
                || self.scan_operator_or_punctuation()
            {
                continue;
            }
            self.consume_error();
        }

        if self.sink_full {
            Err(GlintError::SinkFull)
        } else {
            Ok(())
        }
    }

    /// Eats exactly one byte as an error token; the guaranteed-progress path.
    fn consume_error(&mut self) {
        self.emit_and_advance(1, HighlightKind::Error);
        self.can_be_regex = true;
    }

    /// Consumes braced JS code up to, but not including, the `}` that
    /// un-nests past zero.  Used for JSX braced expressions like
    /// `<div id={get_id()}>` and for template substitutions.
    fn consume_js_before_closing_brace(&mut self) {
        debug_assert!(!self.at_start_of_file);

        let mut brace_level = 0i32;
        while self.index < self.source.len() {
            match self.source[self.index] {
                b'{' => {
                    brace_level += 1;
                    self.emit_and_advance(1, HighlightKind::SymBrace);
                    continue;
                }
                b'}' => {
                    brace_level -= 1;
                    if brace_level < 0 {
                        return;
                    }
                    self.emit_and_advance(1, HighlightKind::SymBrace);
                    continue;
                }
                _ => {}
            }

            if self.skip_whitespace()
                || self.scan_line_comment()
                || self.scan_block_comment()
                || self.scan_jsx_in_js()
                || self.scan_string_literal()
                || self.scan_template()
                || self.scan_regex()
                || self.scan_numeric_literal()
                || self.scan_private_identifier()
                || self.scan_identifier_or_keyword()
                || self.scan_operator_or_punctuation()
            {
                continue;
            }
            self.consume_error();
        }
    }

    // ── Whitespace and comments ─────────────────────────────────────────────

    fn skip_whitespace(&mut self) -> bool {
        let length = match_whitespace(self.remainder());
        self.index += length;
        length != 0
    }

    fn scan_hashbang_comment(&mut self) -> bool {
        let length = match_hashbang_comment(self.remainder(), self.at_start_of_file);
        if length == 0 {
            return false;
        }
        self.emit(self.index, 2, HighlightKind::CommentDelimiter);
        if length > 2 {
            self.emit(self.index + 2, length - 2, HighlightKind::Comment);
        }
        self.advance(length);
        true
    }

    fn scan_line_comment(&mut self) -> bool {
        match match_line_comment(self.remainder()) {
            0 => false,
            length => {
                self.emit_line_comment(length);
                true
            }
        }
    }

    fn emit_line_comment(&mut self, length: usize) {
        self.emit_and_advance(2, HighlightKind::CommentDelimiter);
        if length > 2 {
            self.emit_and_advance(length - 2, HighlightKind::Comment);
        }
        self.can_be_regex = true;
    }

    fn scan_block_comment(&mut self) -> bool {
        let comment = match_block_comment(self.remainder());
        if comment.length == 0 {
            return false;
        }
        self.emit_block_comment(comment);
        true
    }

    fn emit_block_comment(&mut self, comment: CommentResult) {
        debug_assert!(comment.length >= 2);
        self.emit(self.index, 2, HighlightKind::CommentDelimiter);
        let interior = comment.length - 2 - if comment.is_terminated { 2 } else { 0 };
        if interior != 0 {
            self.emit(self.index + 2, interior, HighlightKind::Comment);
        }
        if comment.is_terminated {
            self.emit(
                self.index + comment.length - 2,
                2,
                HighlightKind::CommentDelimiter,
            );
        }
        self.advance(comment.length);
        self.can_be_regex = true;
    }

    // ── String and template literals ────────────────────────────────────────

    fn scan_string_literal(&mut self) -> bool {
        let string = match_string_literal(self.remainder());
        if string.length == 0 {
            return false;
        }
        self.emit_string_literal(string);
        true
    }

    fn emit_string_literal(&mut self, string: StringLiteralResult) {
        debug_assert!(string.length >= 1);
        self.emit_and_advance(1, HighlightKind::StringDelim);
        if string.terminated {
            if string.length > 2 {
                self.emit_and_advance(string.length - 2, HighlightKind::String);
            }
            self.emit_and_advance(1, HighlightKind::StringDelim);
        } else if string.length > 1 {
            self.emit_and_advance(string.length - 1, HighlightKind::String);
        }
        self.can_be_regex = false;
    }

    fn scan_template(&mut self) -> bool {
        if !self.remainder().starts_with(b"`") {
            return false;
        }
        self.consume_template();
        self.can_be_regex = false;
        true
    }

    fn consume_template(&mut self) {
        debug_assert!(self.remainder().starts_with(b"`"));
        self.emit_and_advance(1, HighlightKind::StringDelim);

        // Plain characters accumulate here and flush as one `string` token.
        let mut chars = 0usize;

        while self.index < self.source.len() {
            let rem = self.remainder();
            match rem[0] {
                b'`' => {
                    self.flush_template_chars(&mut chars);
                    self.emit_and_advance(1, HighlightKind::StringDelim);
                    return;
                }
                b'$' if rem.starts_with(b"${") => {
                    self.flush_template_chars(&mut chars);
                    self.emit_and_advance(2, HighlightKind::Escape);
                    self.consume_js_before_closing_brace();
                    if self.index < self.source.len() {
                        debug_assert!(self.source[self.index] == b'}');
                        self.emit_and_advance(1, HighlightKind::Escape);
                    }
                    // Otherwise the substitution is unterminated.
                }
                b'\\' => {
                    let continuation = match_line_continuation(rem);
                    if continuation != 0 {
                        self.flush_template_chars(&mut chars);
                        self.emit_and_advance(1, HighlightKind::Escape);
                        self.advance(continuation - 1);
                        chars += continuation - 1;
                    } else {
                        self.advance(1);
                        chars += 1;
                    }
                }
                _ => {
                    self.advance(1);
                    chars += 1;
                }
            }
        }

        // Unterminated template.
        self.flush_template_chars(&mut chars);
    }

    fn flush_template_chars(&mut self, chars: &mut usize) {
        if *chars != 0 {
            self.emit(self.index - *chars, *chars, HighlightKind::String);
            *chars = 0;
        }
    }

    // ── Regular expressions ─────────────────────────────────────────────────

    fn scan_regex(&mut self) -> bool {
        let rem = self.remainder();
        if !self.can_be_regex || !rem.starts_with(b"/") {
            return false;
        }
        // `//` and `/*` would have been consumed as comments already.
        if rem.len() > 1 && rem[1] != b'/' && rem[1] != b'*' {
            let mut size = 1;
            let mut escaped = false;
            let mut terminated = false;

            while size < rem.len() {
                let c = rem[size];
                if escaped {
                    escaped = false;
                } else if c == b'\\' {
                    escaped = true;
                } else if c == b'/' {
                    terminated = true;
                    size += 1;
                    break;
                } else if c == b'\n' {
                    // Newlines are not allowed in a regex literal.
                    break;
                }
                size += 1;
            }

            if terminated {
                // Trailing flags, e.g. /pattern/gi.
                while size < rem.len() {
                    let Some(d) = decode_and_length(&rem[size..]) else {
                        break;
                    };
                    if !is_js_identifier_part(d.code_point) {
                        break;
                    }
                    size += d.length;
                }
                self.emit_and_advance(size, HighlightKind::String);
                self.can_be_regex = false;
                return true;
            }
        }

        false
    }

    // ── Numbers, identifiers, operators ─────────────────────────────────────

    fn scan_numeric_literal(&mut self) -> bool {
        let number = match_numeric_literal(self.remainder());
        if number.length == 0 {
            return false;
        }
        if number.erroneous {
            self.emit_and_advance(number.length, HighlightKind::Error);
        } else {
            self.emit_and_advance(number.length, HighlightKind::Number);
        }
        self.can_be_regex = false;
        true
    }

    fn scan_private_identifier(&mut self) -> bool {
        match match_private_identifier(self.remainder()) {
            0 => false,
            length => {
                self.emit_and_advance(length, HighlightKind::Id);
                self.can_be_regex = false;
                true
            }
        }
    }

    fn scan_identifier_or_keyword(&mut self) -> bool {
        let rem = self.remainder();
        let id_length = match_identifier(rem);
        if id_length == 0 {
            return false;
        }

        let keyword = TokenType::by_code(&rem[..id_length]);
        match keyword {
            Some(token) => self.emit(self.index, id_length, token.highlight()),
            None => self.emit(self.index, id_length, HighlightKind::Id),
        }
        self.advance(id_length);

        // Certain keywords are followed by an expression where a regex can
        // appear; everything else (plain identifiers included) produces a
        // value, after which `/` must be division.
        self.can_be_regex = keyword.is_some_and(|token| {
            matches!(
                token,
                TokenType::Return
                    | TokenType::Throw
                    | TokenType::Case
                    | TokenType::Delete
                    | TokenType::Void
                    | TokenType::Typeof
                    | TokenType::Yield
                    | TokenType::Await
                    | TokenType::Instanceof
                    | TokenType::In
                    | TokenType::New
            )
        });
        true
    }

    fn scan_operator_or_punctuation(&mut self) -> bool {
        let Some(op) = match_operator_or_punctuation(self.remainder()) else {
            return false;
        };
        match op {
            TokenType::LeftBrace => {
                self.brace_depth += 1;
                self.emit_and_advance(1, HighlightKind::SymBrace);
            }
            TokenType::RightBrace if self.brace_depth == 0 => {
                // A closer with no matching opener.
                self.consume_error();
                return true;
            }
            TokenType::RightBrace => {
                self.brace_depth -= 1;
                self.emit_and_advance(1, HighlightKind::SymBrace);
            }
            _ => self.emit_and_advance(op.length(), op.highlight()),
        }

        // All operators except postfix/closing ones expect an expression
        // next, so a regex may follow.
        self.can_be_regex = !matches!(
            op,
            TokenType::PlusPlus
                | TokenType::MinusMinus
                | TokenType::RightParen
                | TokenType::RightBracket
                | TokenType::RightBrace
                | TokenType::Plus
                | TokenType::Minus
        );
        true
    }

    // ── JSX ─────────────────────────────────────────────────────────────────

    /// Probes for a JSX element at the current position.
    ///
    /// A tag is first trial-parsed with the counting consumer (arbitrary
    /// lookahead, no output); only on acceptance is the grammar re-run with
    /// the emitting consumer.  On rejection `<` falls through to the
    /// less-than operator.  Closing tags are not a valid start at the JS
    /// expression level.
    fn scan_jsx_in_js(&mut self) -> bool {
        let Some(opening) = match_jsx_tag_in(self.remainder(), JsxTagSubset::NonClosing) else {
            return false;
        };
        self.consume_jsx_tag();
        if opening.tag != JsxTagType::SelfClosing {
            debug_assert!(opening.tag.is_opening());
            self.consume_jsx_children_and_closing_tag();
        }
        self.can_be_regex = true;
        true
    }

    /// Re-runs the tag grammar, emitting as it goes.  Must only be called
    /// after a successful trial parse at the same position.
    fn consume_jsx_tag(&mut self) {
        let rem = self.remainder();
        let mut consumer = EmittingTagConsumer { hl: self };
        match_jsx_tag_with(&mut consumer, rem, JsxTagSubset::All);
    }

    fn consume_jsx_children_and_closing_tag(&mut self) {
        let enclosing_depth = self.jsx_depth;
        self.jsx_depth = 0;
        self.consume_jsx_children();
        self.jsx_depth = enclosing_depth;
    }

    /// Scans JSX child content until the closing tag of the enclosing
    /// element.  Plain text is untagged; references, nested tags, and braced
    /// expressions are highlighted; stray closers are errors.
    fn consume_jsx_children(&mut self) {
        loop {
            let rem = self.remainder();
            if rem.is_empty() {
                return;
            }
            let Some(safe_length) = rem
                .iter()
                .position(|&b| matches!(b, b'&' | b'{' | b'}' | b'<' | b'>'))
            else {
                // Unterminated child content; harmless for highlighting.
                self.advance(rem.len());
                return;
            };
            self.advance(safe_length);

            match self.source[self.index] {
                b'&' => {
                    match html::match_character_reference(self.remainder()) {
                        0 => self.advance(1),
                        reference => self.emit_and_advance(reference, HighlightKind::Escape),
                    }
                }
                b'<' => {
                    let Some(matched) = match_jsx_tag(self.remainder()) else {
                        self.emit_and_advance(1, HighlightKind::Error);
                        continue;
                    };
                    self.consume_jsx_tag();
                    if matched.tag.is_opening() {
                        self.jsx_depth += 1;
                    }
                    if matched.tag.is_closing() {
                        self.jsx_depth -= 1;
                        if self.jsx_depth < 0 {
                            return;
                        }
                    }
                }
                b'{' => {
                    let braced = match_jsx_braced(self.remainder());
                    if braced.length != 0 {
                        self.emit_jsx_braced(braced);
                    } else {
                        self.emit_and_advance(1, HighlightKind::Error);
                    }
                }
                // Stray closers that should have been part of a tag or a
                // braced child.
                b'>' | b'}' => self.emit_and_advance(1, HighlightKind::Error),
                _ => unreachable!("position() returned a non-special byte"),
            }
        }
    }

    /// Highlights a `{…}` span: braces as `sym_brace`, contents as embedded
    /// JS with the full driver machinery (nested JSX included).
    fn emit_jsx_braced(&mut self, braced: JsxBracedResult) {
        debug_assert!(braced.length != 0);
        debug_assert!(self.source[self.index] == b'{');

        self.emit_and_advance(1, HighlightKind::SymBrace);
        let js_length = braced.length - if braced.is_terminated { 2 } else { 1 };
        if js_length != 0 {
            self.consume_js_before_closing_brace();
        }
        if braced.is_terminated {
            self.emit_and_advance(1, HighlightKind::SymBrace);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Emitting JSX consumer
// ─────────────────────────────────────────────────────────────────────────────

/// The driver wired up as a tag consumer: every callback emits and advances.
struct EmittingTagConsumer<'h, 's, 'o, S: TokenSink> {
    hl: &'h mut Highlighter<'s, 'o, S>,
}

impl<S: TokenSink> JsxTagConsumer for EmittingTagConsumer<'_, '_, '_, S> {
    fn done(&mut self, _tag: JsxTagType) {}

    fn whitespace(&mut self, length: usize) {
        self.hl.advance(length);
    }

    fn block_comment(&mut self, comment: CommentResult) {
        self.hl.emit_block_comment(comment);
    }

    fn line_comment(&mut self, length: usize) {
        self.hl.emit_line_comment(length);
    }

    fn advance(&mut self, amount: usize) {
        self.hl.advance(amount);
    }

    fn opening_symbol(&mut self) {
        self.hl.emit_and_advance(1, HighlightKind::SymPunc);
    }

    fn closing_symbol(&mut self) {
        self.hl.emit_and_advance(1, HighlightKind::SymPunc);
    }

    fn element_name(&mut self, length: usize) {
        self.hl.emit_and_advance(length, HighlightKind::MarkupTag);
    }

    fn attribute_name(&mut self, length: usize) {
        self.hl.emit_and_advance(length, HighlightKind::MarkupTag);
    }

    fn attribute_equals(&mut self) {
        self.hl.emit_and_advance(1, HighlightKind::SymPunc);
    }

    fn string_literal(&mut self, string: StringLiteralResult) {
        self.hl.emit_string_literal(string);
    }

    fn braced(&mut self, braced: JsxBracedResult) {
        debug_assert!(braced.is_terminated && braced.length >= 2);
        self.hl.emit_jsx_braced(braced);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
