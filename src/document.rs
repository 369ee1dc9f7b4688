//! Per-chapter document model.

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::path::{Path, PathBuf};

use crate::markdown::MarkdownRenderer;

/// Suffix selecting source files for conversion.
const MARKDOWN_SUFFIX: &str = ".md";

/// Suffix appended to the source filename to form the output filename.
const OUTPUT_SUFFIX: &str = ".html";

/// Class attribute of the wrapper fragment.
const WRAPPER_CLASS: &str = "nsw";

/// A single markdown chapter on its way to an HTML fragment.
///
/// Identified by the source filename only. Rendering and wrapping are
/// derived from the raw text; nothing outlives the conversion except the
/// file written from [`Document::wrapped`].
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    source: String,
}

impl Document {
    /// Creates document from a filename and its raw markdown text.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Reads document `name` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF8.
    pub fn read(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::new(name, source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Output filename: the source filename with `.html` appended.
    ///
    /// The `.md` extension is kept, so `intro.md` becomes `intro.md.html`.
    pub fn output_name(&self) -> String {
        output_name(&self.name)
    }

    /// Output path for this document under `dest`.
    pub fn output_path(&self, dest: &Path) -> PathBuf {
        dest.join(self.output_name())
    }

    /// Renders the document body and wraps it in the fixed fragment.
    ///
    /// # Errors
    ///
    /// Returns error if markdown rendering fails.
    pub fn wrapped(&self, renderer: &MarkdownRenderer<'_>) -> Result<String> {
        let body = renderer
            .render(&self.source)
            .with_context(|| format!("Failed to render {}", self.name))?;
        Ok(wrap(&body).into_string())
    }
}

/// Returns the output filename for a source filename.
pub fn output_name(name: &str) -> String {
    format!("{}{}", name, OUTPUT_SUFFIX)
}

/// Returns true when `name` selects a file for conversion.
///
/// Matching is a literal, case sensitive suffix test.
pub fn is_markdown_name(name: &str) -> bool {
    name.ends_with(MARKDOWN_SUFFIX)
}

/// Wraps rendered HTML in `<div class="nsw">` without adding whitespace.
pub fn wrap(body: &str) -> Markup {
    html! {
        div class=(WRAPPER_CLASS) { (PreEscaped(body)) }
    }
}
