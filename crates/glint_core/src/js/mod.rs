//! JavaScript and JSX highlighting.
//!
//! - [`tokens`] — static classification table for keywords, operators, and
//!   punctuation.
//! - [`lex`] — pure matchers for the lexical grammar.
//! - [`jsx`] — JSX tag and braced-expression matchers with trial parsing.
//! - [`highlighter`] — the stateful driver tying it all together.

use bumpalo::Bump;

use crate::error::GlintResult;
use crate::token::{HighlightOptions, TokenSink};

mod highlighter;
/// JSX tag and braced-expression matchers.
pub mod jsx;
/// Pure matchers for the JS lexical grammar.
pub mod lex;
/// Static classification table for keywords, operators, and punctuation.
pub mod tokens;

/// Highlights `source` as JavaScript (with JSX) into `out`.
///
/// Tokens arrive on the sink in source order, non-overlapping, each at least
/// one byte long.  Malformed input — bad numeric literals, stray closers,
/// invalid UTF-8 — is reported as `error`-kinded tokens; the run itself only
/// fails when the sink runs out of capacity.
///
/// The scratch arena is unused by the JS/JSX engine but part of the shared
/// language-driver signature; allocation-hungry languages draw from it.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use glint_core::token::{HighlightKind, HighlightOptions, Token};
///
/// let mut tokens: Vec<Token> = Vec::new();
/// let memory = Bump::new();
/// glint_core::highlight_javascript(
///     &mut tokens,
///     b"return 42;",
///     &memory,
///     HighlightOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(tokens[0].kind, HighlightKind::KwControl);
/// assert_eq!(tokens[1].kind, HighlightKind::Number);
/// ```
pub fn highlight_javascript<S: TokenSink>(
    out: &mut S,
    source: &[u8],
    _memory: &Bump,
    options: HighlightOptions,
) -> GlintResult<()> {
    highlighter::Highlighter::new(out, source, options).run()
}
