//! Criterion benchmarks for the highlighting hot path.
//!
//! Run with: `cargo bench --package glint_core`

use std::hint::black_box;

use bumpalo::Bump;
use criterion::{Criterion, criterion_group, criterion_main};

use glint_core::token::{HighlightOptions, Token};
use glint_core::highlight_javascript;

const JS_CHUNK: &str = r#"
// Tiny but representative mix of JS constructs.
export function fibonacci(n) {
    if (n <= 1) return n;
    let a = 0, b = 1;
    for (let i = 2; i <= n; i++) {
        [a, b] = [b, a + b];
    }
    return b;
}

const PATTERN = /[a-z]+_\d{2,}/gi;
const big = 1_000_000n;
const greeting = `hello ${"world"} at ${Date.now()}`;
"#;

const JSX_CHUNK: &str = r#"
export const List = ({ items }) => (
    <ul className="list" data-count={items.length}>
        {items.map(item => (
            <li key={item.id}>{item.label}&nbsp;&mdash;{item.value}</li>
        ))}
    </ul>
);
"#;

fn repeat_source(chunk: &str, target_bytes: usize) -> String {
    let mut source = String::with_capacity(target_bytes + chunk.len());
    while source.len() < target_bytes {
        source.push_str(chunk);
    }
    source
}

fn bench_highlight(c: &mut Criterion, name: &str, chunk: &str, options: HighlightOptions) {
    let source = repeat_source(chunk, 64 * 1024);
    c.bench_function(name, |b| {
        // The token vector lives across iterations to measure steady-state
        // scanning rather than allocation.
        let mut tokens: Vec<Token> = Vec::new();
        let memory = Bump::new();
        b.iter(|| {
            tokens.clear();
            highlight_javascript(
                &mut tokens,
                black_box(source.as_bytes()),
                &memory,
                options,
            )
            .unwrap();
            black_box(tokens.len());
        });
    });
}

fn bench_highlight_js(c: &mut Criterion) {
    bench_highlight(c, "highlight_js_64k", JS_CHUNK, HighlightOptions::default());
}

fn bench_highlight_js_uncoalesced(c: &mut Criterion) {
    bench_highlight(
        c,
        "highlight_js_64k_uncoalesced",
        JS_CHUNK,
        HighlightOptions { coalescing: false },
    );
}

fn bench_highlight_jsx(c: &mut Criterion) {
    bench_highlight(c, "highlight_jsx_64k", JSX_CHUNK, HighlightOptions::default());
}

criterion_group!(
    benches,
    bench_highlight_js,
    bench_highlight_js_uncoalesced,
    bench_highlight_jsx
);
criterion_main!(benches);
