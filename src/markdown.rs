//! Markdown rendering with raw HTML passthrough.
//!
//! This module wraps comrak configured like a CommonMark default preset:
//! tables and strikethrough on, literal HTML emitted unescaped, and no
//! typographic or linkifying rewrites of the source text.

mod renderer;

pub use renderer::MarkdownRenderer;
