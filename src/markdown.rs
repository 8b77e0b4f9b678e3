//! Markdown to HTML conversion.
//!
//! Thin wrapper over [pulldown-cmark](https://docs.rs/pulldown-cmark). The
//! converter is an explicit value constructed once per generation and passed
//! by reference into every pipeline stage that needs it — there is no
//! process-wide converter singleton. Each content unit (main body, each
//! include) is converted independently so include boundaries stay clean.

use pulldown_cmark::{Options, Parser, html};

/// Markdown converter with a fixed option set.
///
/// Stateless: `to_html` is a pure function of its input, so converting the
/// same text twice yields identical HTML.
#[derive(Debug, Clone)]
pub struct Converter {
    options: Options,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// CommonMark plus the extensions documentation pages actually use:
    /// tables, footnotes, and strikethrough. Fenced code blocks are core.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }

    /// Convert one Markdown fragment to an HTML fragment.
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
