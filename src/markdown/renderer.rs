//! Markdown to HTML rendering.

use anyhow::{Context, Result};
use comrak::Options;

/// Renders markdown to HTML fragments.
///
/// Literal HTML in the source is passed through unescaped. GFM tables and
/// strikethrough are enabled; smart punctuation, bare URL autolinking and
/// heading anchors are left off so the output matches plain CommonMark.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with raw HTML passthrough enabled.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options
        options.extension.strikethrough = true;
        options.extension.table = true;

        // Render options (chapters are trusted input)
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML, terminated by a newline for non-empty input
    ///
    /// # Errors
    ///
    /// Returns error if formatting the parsed document fails. Output goes to
    /// an in-memory buffer, so this only surfaces renderer bugs.
    pub fn render(&self, content: &str) -> Result<String> {
        let mut buffer = Vec::with_capacity(content.len() * 2);
        let arena = comrak::Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        comrak::format_html(root, &self.options, &mut buffer)
            .context("Failed to format markdown as HTML")?;

        String::from_utf8(buffer).context("Rendered HTML is not valid UTF8")
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
