//! Error types for the glint engine.

use thiserror::Error;

/// All errors that can be produced by the glint engine.
///
/// Malformed input is never an error at this level: the highlighter is
/// tolerant and reports lexical trouble in-band as
/// [`HighlightKind::Error`](crate::token::HighlightKind::Error) tokens.
#[derive(Debug, Error)]
pub enum GlintError {
    /// The output sink refused a token because its capacity is exhausted.
    ///
    /// The highlighter keeps scanning after the first refused token (forward
    /// progress does not depend on the sink), but stops emitting; every token
    /// accepted before the overflow is valid.
    #[error("token sink is full")]
    SinkFull,
}

/// Convenient `Result` alias for fallible engine operations.
pub type GlintResult<T> = Result<T, GlintError>;
