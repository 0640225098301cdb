#![no_main]

use bumpalo::Bump;
use glint_core::highlight_javascript;
use glint_core::token::{HighlightOptions, Token};
use libfuzzer_sys::fuzz_target;

// The highlighter must tolerate arbitrary bytes — including invalid UTF-8 —
// and every run must uphold the output invariants: tokens are in order,
// non-overlapping, at least one byte long, and inside the source bounds.
fuzz_target!(|data: &[u8]| {
    let mut tokens: Vec<Token> = Vec::new();
    let memory = Bump::new();
    highlight_javascript(
        &mut tokens,
        data,
        &memory,
        HighlightOptions { coalescing: false },
    )
    .expect("a Vec sink never overflows");

    let mut previous_end = 0u32;
    for token in &tokens {
        assert!(token.length >= 1, "empty token {token:?}");
        assert!(
            token.begin >= previous_end,
            "out-of-order or overlapping token {token:?}"
        );
        assert!(
            token.end() as usize <= data.len(),
            "token out of bounds {token:?}"
        );
        previous_end = token.end();
    }
});
