//! `glint` — command-line front end for the glint syntax highlighter.
//!
//! Reads a JavaScript/JSX source file, highlights it, and writes either a
//! self-contained HTML fragment or a plain token listing.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bumpalo::Bump;
use clap::Parser;

use glint_core::token::{HighlightOptions, Token};
use glint_core::highlight_javascript;

/// Syntax-highlight a JavaScript or JSX source file.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about, long_about = None)]
struct Cli {
    /// Input source file.
    input: PathBuf,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print one `(begin, length, kind)` line per token instead of HTML.
    #[arg(long)]
    tokens: bool,

    /// Disable merging of adjacent same-kind tokens.
    #[arg(long)]
    no_coalescing: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let mut tokens: Vec<Token> = Vec::new();
    let memory = Bump::new();
    let options = HighlightOptions {
        coalescing: !cli.no_coalescing,
    };
    highlight_javascript(&mut tokens, &source, &memory, options)
        .context("highlighting failed")?;

    let rendered = if cli.tokens {
        render_token_list(&tokens)
    } else {
        render_html(&source, &tokens)
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn render_token_list(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "({}, {}, {})\n",
            token.begin,
            token.length,
            token.kind.name()
        ));
    }
    out
}

/// Default colors for the emitted classes, dark-on-light.
const STYLE: &str = "\
pre.glint { background: #fdfdfd; color: #1f2328; }
.gl-kw_type, .gl-kw_control, .gl-kw_other { color: #cf222e; }
.gl-number { color: #0550ae; }
.gl-string, .gl-string_delim { color: #0a3069; }
.gl-escape { color: #953800; }
.gl-comment, .gl-comment_delimiter { color: #6e7781; }
.gl-markup_tag { color: #116329; }
.gl-error { color: #ffffff; background: #cf222e; }
";

/// Renders the source as an HTML `<pre>` fragment with each token wrapped in
/// a `<span>`; bytes not covered by any token (whitespace, JSX text) pass
/// through with plain escaping.
fn render_html(source: &[u8], tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n<pre class=\"glint\">");

    let mut cursor = 0usize;
    for token in tokens {
        let begin = token.begin as usize;
        let end = token.end() as usize;
        if cursor < begin {
            escape_html_into(&mut out, &source[cursor..begin]);
        }
        out.push_str("<span class=\"gl-");
        out.push_str(token.kind.name());
        out.push_str("\">");
        escape_html_into(&mut out, &source[begin..end]);
        out.push_str("</span>");
        cursor = end;
    }
    if cursor < source.len() {
        escape_html_into(&mut out, &source[cursor..]);
    }

    out.push_str("</pre>\n");
    out
}

fn escape_html_into(out: &mut String, bytes: &[u8]) {
    for c in String::from_utf8_lossy(bytes).chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(source: &[u8]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let memory = Bump::new();
        highlight_javascript(&mut tokens, source, &memory, HighlightOptions::default()).unwrap();
        tokens
    }

    #[test]
    fn test_render_token_list() {
        let tokens = highlight(b"let x;");
        let listing = render_token_list(&tokens);
        assert_eq!(listing.lines().count(), tokens.len());
        assert!(listing.starts_with("(0, 3, kw_type)\n"));
    }

    #[test]
    fn test_render_html_escapes_and_wraps() {
        let source = b"a < \"b\";";
        let html = render_html(source, &highlight(source));
        assert!(html.contains("<span class=\"gl-id\">a</span>"));
        assert!(html.contains("<span class=\"gl-sym_op\">&lt;</span>"));
        assert!(html.contains("<span class=\"gl-string_delim\">&quot;</span>"));
        assert!(html.contains("<span class=\"gl-string\">b</span>"));
        assert!(html.starts_with("<style>"));
        assert!(html.ends_with("</pre>\n"));
    }

    #[test]
    fn test_render_html_passes_gaps_through() {
        // JSX text children are not covered by tokens but must still render.
        let source = b"<p>hi</p>";
        let html = render_html(source, &highlight(source));
        assert!(html.contains("hi"));
    }
}
