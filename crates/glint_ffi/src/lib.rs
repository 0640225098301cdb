//! `glint_ffi` — C-ABI surface for the glint syntax highlighter.
//!
//! This crate exposes a stable C API (`extern "C"`, `#[unsafe(no_mangle)]`)
//! so that editors and other embedders can link against glint without
//! depending on Rust tooling.
//!
//! # Design
//!
//! There are no opaque handles: highlighting is a single stateless call that
//! writes `GlintToken` records into a caller-provided array.  `GlintToken`
//! is layout-compatible with [`glint_core::token::Token`] (`u32` begin,
//! `u32` length, `u8` kind), so the same buffer can be shared by Rust and C
//! callers without conversion.

use std::ffi::c_char;

use bumpalo::Bump;
use glint_core::token::{FixedTokenSink, HighlightKind, HighlightOptions, Token};

/// Result of a highlighting call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlintStatus {
    /// All tokens were written.
    Ok = 0,
    /// The token array filled up; `token_count` holds the number written and
    /// every written token is valid.
    SinkFull = 1,
    /// A null pointer was passed with a nonzero length or capacity.
    BadArgument = 2,
}

/// Enables merging of adjacent same-kind tokens; see
/// [`HighlightOptions::coalescing`].
pub const GLINT_FLAG_COALESCING: u32 = 1;

/// Highlights `source` as JavaScript/JSX into the caller's token array.
///
/// - `tokens` / `capacity`: destination array and its element count.
/// - `token_count`: out-parameter receiving the number of tokens written;
///   always stored, including on overflow.
/// - `source` / `source_length`: UTF-8 source bytes.  Invalid UTF-8 is
///   tolerated and shows up as `error` tokens.
/// - `flags`: combination of `GLINT_FLAG_*` bits.
///
/// # Safety
///
/// - `tokens` must point to `capacity` writable `GlintToken` elements, or
///   `capacity` must be 0.
/// - `source` must point to `source_length` readable bytes, or
///   `source_length` must be 0.
/// - `token_count` must be a valid, writable pointer.
/// - The buffers must not overlap and must outlive the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn glint_highlight_js(
    tokens: *mut Token,
    capacity: usize,
    token_count: *mut usize,
    source: *const u8,
    source_length: usize,
    flags: u32,
) -> GlintStatus {
    if token_count.is_null()
        || (tokens.is_null() && capacity != 0)
        || (source.is_null() && source_length != 0)
    {
        if !token_count.is_null() {
            // SAFETY: checked non-null; caller guarantees writability.
            unsafe { *token_count = 0 };
        }
        return GlintStatus::BadArgument;
    }

    // SAFETY: per the contract above, both regions are valid for the given
    // lengths; a zero length yields a valid empty slice. `from_raw_parts[_mut]`
    // require non-null, well-aligned pointers even for zero-length slices, so
    // the zero-length cases are special-cased to avoid passing a null/unaligned
    // pointer through.
    let buffer: &mut [Token] = if capacity == 0 {
        &mut []
    } else {
        unsafe { std::slice::from_raw_parts_mut(tokens, capacity) }
    };
    let source: &[u8] = if source_length == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(source, source_length) }
    };

    let mut sink = FixedTokenSink::new(buffer);
    let memory = Bump::new();
    let options = HighlightOptions {
        coalescing: flags & GLINT_FLAG_COALESCING != 0,
    };
    let result = glint_core::highlight_javascript(&mut sink, source, &memory, options);

    // SAFETY: checked non-null above.
    unsafe { *token_count = sink.len() };
    match result {
        Ok(()) => GlintStatus::Ok,
        Err(_) => GlintStatus::SinkFull,
    }
}

/// Returns the NUL-terminated snake_case name of a highlight kind, e.g.
/// `"kw_control"`, for building CSS class names on the embedder side.
///
/// Returns a null pointer for out-of-range values.  The returned pointer has
/// static lifetime and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn glint_highlight_kind_name(kind: u8) -> *const c_char {
    let name = match HighlightKind::from_repr(kind) {
        Some(HighlightKind::KwType) => c"kw_type",
        Some(HighlightKind::KwControl) => c"kw_control",
        Some(HighlightKind::KwOther) => c"kw_other",
        Some(HighlightKind::Id) => c"id",
        Some(HighlightKind::Number) => c"number",
        Some(HighlightKind::String) => c"string",
        Some(HighlightKind::StringDelim) => c"string_delim",
        Some(HighlightKind::Escape) => c"escape",
        Some(HighlightKind::Comment) => c"comment",
        Some(HighlightKind::CommentDelimiter) => c"comment_delimiter",
        Some(HighlightKind::SymPunc) => c"sym_punc",
        Some(HighlightKind::SymBrace) => c"sym_brace",
        Some(HighlightKind::SymOp) => c"sym_op",
        Some(HighlightKind::MarkupTag) => c"markup_tag",
        Some(HighlightKind::Error) => c"error",
        None => return std::ptr::null(),
    };
    name.as_ptr()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    fn blank() -> Token {
        Token {
            begin: 0,
            length: 0,
            kind: HighlightKind::Error,
        }
    }

    #[test]
    fn test_highlight_basic() {
        let mut tokens = [blank(); 16];
        let mut count = 0usize;
        let source = b"let x = 42;";
        let status = unsafe {
            glint_highlight_js(
                tokens.as_mut_ptr(),
                tokens.len(),
                &mut count,
                source.as_ptr(),
                source.len(),
                GLINT_FLAG_COALESCING,
            )
        };
        assert_eq!(status, GlintStatus::Ok);
        assert_eq!(count, 5);
        assert_eq!(tokens[0].kind, HighlightKind::KwType);
        assert_eq!(tokens[3].kind, HighlightKind::Number);
    }

    #[test]
    fn test_highlight_sink_full() {
        let mut tokens = [blank(); 2];
        let mut count = 0usize;
        let source = b"a + b + c";
        let status = unsafe {
            glint_highlight_js(
                tokens.as_mut_ptr(),
                tokens.len(),
                &mut count,
                source.as_ptr(),
                source.len(),
                GLINT_FLAG_COALESCING,
            )
        };
        assert_eq!(status, GlintStatus::SinkFull);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_highlight_empty_source() {
        let mut count = usize::MAX;
        let status = unsafe {
            glint_highlight_js(
                std::ptr::null_mut(),
                0,
                &mut count,
                std::ptr::null(),
                0,
                GLINT_FLAG_COALESCING,
            )
        };
        assert_eq!(status, GlintStatus::Ok);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_bad_arguments() {
        let mut count = usize::MAX;
        let source = b"x";
        let status = unsafe {
            glint_highlight_js(
                std::ptr::null_mut(),
                4,
                &mut count,
                source.as_ptr(),
                source.len(),
                0,
            )
        };
        assert_eq!(status, GlintStatus::BadArgument);
        assert_eq!(count, 0);

        let status = unsafe {
            glint_highlight_js(
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
                source.as_ptr(),
                source.len(),
                0,
            )
        };
        assert_eq!(status, GlintStatus::BadArgument);
    }

    #[test]
    fn test_kind_names_match_core() {
        for value in 0..HighlightKind::COUNT as u8 {
            let pointer = glint_highlight_kind_name(value);
            assert!(!pointer.is_null());
            // SAFETY: the function returns a static NUL-terminated string.
            let name = unsafe { CStr::from_ptr(pointer) }.to_str().unwrap();
            assert_eq!(name, HighlightKind::from_repr(value).unwrap().name());
        }
        assert!(glint_highlight_kind_name(HighlightKind::COUNT as u8).is_null());
    }
}
