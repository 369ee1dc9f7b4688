//! Batch renderer turning a directory of markdown chapters into HTML fragments.

mod config;
mod convert;
mod document;
mod markdown;
mod report;
mod scan;

pub use config::Config;
pub use convert::{convert, convert_all, convert_all_with, run, run_with};
pub use document::{Document, is_markdown_name, output_name, wrap};
pub use markdown::MarkdownRenderer;
pub use report::{BatchReport, Failure, Outcome, Stage};
pub use scan::list_candidates;
