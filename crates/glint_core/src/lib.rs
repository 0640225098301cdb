//! `glint_core` — a streaming syntax-highlighter engine.
//!
//! The engine consumes a UTF-8 source buffer and produces a sequence of
//! non-overlapping `(begin, length, kind)` tokens on a caller-supplied sink;
//! downstream consumers render those however they like (CSS classes,
//! terminal colors, …).  Scanning is a single left-to-right pass with no
//! heap allocation on the hot path, so independent sources can be
//! highlighted in parallel with independent drivers.
//!
//! # Crate layout
//!
//! - [`error`] — Engine error types and [`GlintResult`] alias.
//! - [`token`] — Highlight kinds, token records, options, and sinks.
//! - [`chars`] — Character classification predicates.
//! - [`utf8`] — Minimal one-code-point UTF-8 decoding.
//! - [`html`] — HTML character-reference matching for JSX children.
//! - [`js`] — The JavaScript/JSX highlighter.

/// Character classification predicates.
pub mod chars;
/// Engine error types and [`GlintResult`] alias.
pub mod error;
/// HTML character-reference matching.
pub mod html;
/// The JavaScript/JSX highlighter.
pub mod js;
/// Highlight kinds, token records, options, and sinks.
pub mod token;
/// Minimal one-code-point UTF-8 decoding.
pub mod utf8;

pub use error::{GlintError, GlintResult};
pub use js::highlight_javascript;
pub use token::{FixedTokenSink, HighlightKind, HighlightOptions, Token, TokenSink};
