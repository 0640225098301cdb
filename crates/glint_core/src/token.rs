//! Highlight output model: highlight kinds, token records, options, and
//! output sinks.

// ─────────────────────────────────────────────────────────────────────────────
// HighlightKind
// ─────────────────────────────────────────────────────────────────────────────

/// The presentational category attached to each emitted token.
///
/// A renderer maps each kind to a CSS class (or terminal color); the lexer
/// never decides presentation beyond this classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HighlightKind {
    /// Declaration keywords such as `class`, `let`, `function`.
    KwType,
    /// Control-flow keywords such as `if`, `return`, `yield`.
    KwControl,
    /// Every other keyword, including value keywords like `true` and `null`.
    KwOther,
    /// Plain and private identifiers.
    Id,
    /// Well-formed numeric literals.
    Number,
    /// String and regular-expression literal contents.
    String,
    /// Quotes and backticks delimiting a string or template literal.
    StringDelim,
    /// Escape-like spans: `${`/`}` of a template substitution, template
    /// line continuations, and HTML character references in JSX children.
    Escape,
    /// Comment contents.
    Comment,
    /// Comment delimiters: `//`, `/*`, `*/`, `#!`.
    CommentDelimiter,
    /// Punctuation: parentheses, brackets, separators, member access, and
    /// the symbols of a JSX tag.
    SymPunc,
    /// Curly braces.
    SymBrace,
    /// Operators.
    SymOp,
    /// JSX element and attribute names.
    MarkupTag,
    /// A span the lexer could not make sense of.
    Error,
}

impl HighlightKind {
    /// Number of distinct highlight kinds.
    pub const COUNT: usize = 15;

    /// The stable snake_case name of this kind, e.g. `"kw_control"`.
    ///
    /// Renderers typically use this as a CSS class suffix.
    pub fn name(self) -> &'static str {
        match self {
            HighlightKind::KwType => "kw_type",
            HighlightKind::KwControl => "kw_control",
            HighlightKind::KwOther => "kw_other",
            HighlightKind::Id => "id",
            HighlightKind::Number => "number",
            HighlightKind::String => "string",
            HighlightKind::StringDelim => "string_delim",
            HighlightKind::Escape => "escape",
            HighlightKind::Comment => "comment",
            HighlightKind::CommentDelimiter => "comment_delimiter",
            HighlightKind::SymPunc => "sym_punc",
            HighlightKind::SymBrace => "sym_brace",
            HighlightKind::SymOp => "sym_op",
            HighlightKind::MarkupTag => "markup_tag",
            HighlightKind::Error => "error",
        }
    }

    /// Converts the `repr(u8)` discriminant back into a kind.
    ///
    /// Returns `None` for out-of-range values.  Used by FFI callers that
    /// receive kinds as raw bytes.
    pub fn from_repr(value: u8) -> Option<HighlightKind> {
        const KINDS: [HighlightKind; HighlightKind::COUNT] = [
            HighlightKind::KwType,
            HighlightKind::KwControl,
            HighlightKind::KwOther,
            HighlightKind::Id,
            HighlightKind::Number,
            HighlightKind::String,
            HighlightKind::StringDelim,
            HighlightKind::Escape,
            HighlightKind::Comment,
            HighlightKind::CommentDelimiter,
            HighlightKind::SymPunc,
            HighlightKind::SymBrace,
            HighlightKind::SymOp,
            HighlightKind::MarkupTag,
            HighlightKind::Error,
        ];
        KINDS.get(usize::from(value)).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// A single highlighted span.
///
/// `begin` and `length` are byte offsets into the source buffer.  Tokens are
/// emitted in strictly increasing `begin` order, never overlap, and always
/// satisfy `length >= 1` and `begin + length <= source.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Token {
    /// Byte offset of the first byte of the span.
    pub begin: u32,
    /// Length of the span in bytes.
    pub length: u32,
    /// The presentational category of the span.
    pub kind: HighlightKind,
}

impl Token {
    /// Byte offset one past the last byte of the span.
    pub fn end(&self) -> u32 {
        self.begin + self.length
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HighlightOptions
// ─────────────────────────────────────────────────────────────────────────────

/// Language-agnostic highlighting options.
#[derive(Debug, Clone, Copy)]
pub struct HighlightOptions {
    /// Merge adjacent tokens of identical kind into a single span.
    ///
    /// Enabled by default.  Disabling it yields one token per lexical
    /// element, which is mostly useful for testing.
    pub coalescing: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self { coalescing: true }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenSink
// ─────────────────────────────────────────────────────────────────────────────

/// Destination for emitted tokens.
///
/// The driver holds an exclusive borrow of its sink for the whole run and is
/// the sole writer.  Coalescing is the driver's job; a sink only needs to
/// store tokens and expose the most recent one for in-place extension.
pub trait TokenSink {
    /// Returns `true` when no token has been accepted yet.
    fn is_empty(&self) -> bool;

    /// The most recently accepted token, if any.
    fn last_mut(&mut self) -> Option<&mut Token>;

    /// Appends `token`.  Returns `false` when the sink is out of capacity,
    /// in which case the token is discarded.
    fn push(&mut self, token: Token) -> bool;
}

impl TokenSink for Vec<Token> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn last_mut(&mut self) -> Option<&mut Token> {
        <[Token]>::last_mut(self)
    }

    fn push(&mut self, token: Token) -> bool {
        Vec::push(self, token);
        true
    }
}

/// Non-owning, bounded sink over caller-provided storage.
///
/// Useful for embedders that cannot allocate, e.g. across the C ABI.  When
/// the storage fills up, [`TokenSink::push`] reports failure and the entry
/// point returns [`GlintError::SinkFull`](crate::error::GlintError::SinkFull).
#[derive(Debug)]
pub struct FixedTokenSink<'a> {
    buffer: &'a mut [Token],
    len: usize,
}

impl<'a> FixedTokenSink<'a> {
    /// Creates a sink writing into `buffer`.
    pub fn new(buffer: &'a mut [Token]) -> Self {
        Self { buffer, len: 0 }
    }

    /// Number of tokens accepted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The accepted tokens, in emission order.
    pub fn tokens(&self) -> &[Token] {
        &self.buffer[..self.len]
    }
}

impl TokenSink for FixedTokenSink<'_> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last_mut(&mut self) -> Option<&mut Token> {
        match self.len {
            0 => None,
            n => Some(&mut self.buffer[n - 1]),
        }
    }

    fn push(&mut self, token: Token) -> bool {
        if self.len == self.buffer.len() {
            return false;
        }
        self.buffer[self.len] = token;
        self.len += 1;
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
