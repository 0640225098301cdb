#![no_main]

use bumpalo::Bump;
use glint_core::highlight_javascript;
use glint_core::token::{HighlightOptions, Token};
use libfuzzer_sys::fuzz_target;

fn highlight(data: &[u8], coalescing: bool) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let memory = Bump::new();
    highlight_javascript(&mut tokens, data, &memory, HighlightOptions { coalescing })
        .expect("a Vec sink never overflows");
    tokens
}

// Coalescing must be a pure post-processing step: highlighting with it
// enabled has to equal highlighting without it followed by merging adjacent
// same-kind tokens that share an edge.
fuzz_target!(|data: &[u8]| {
    let plain = highlight(data, false);
    let merged = highlight(data, true);

    let mut folded: Vec<Token> = Vec::new();
    for token in plain {
        if let Some(last) = folded.last_mut()
            && last.kind == token.kind
            && last.end() == token.begin
        {
            last.length += token.length;
            continue;
        }
        folded.push(token);
    }

    assert_eq!(folded, merged);
});
