//! Per-file conversion pipeline and batch driver.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, info};

use crate::config::Config;
use crate::document::Document;
use crate::markdown::MarkdownRenderer;
use crate::report::{BatchReport, Failure, Outcome, Stage};
use crate::scan::list_candidates;

/// Converts one markdown file into a wrapped HTML fragment.
///
/// Reads `source_dir/name`, renders and wraps it, then writes
/// `dest_dir/name.html`. Each step runs only if the previous one succeeded.
///
/// # Arguments
///
/// * `renderer`: Markdown renderer
/// * `source_dir`: Directory holding the markdown file
/// * `dest_dir`: Existing directory receiving the HTML file
/// * `name`: Filename of the markdown file
///
/// # Returns
///
/// Path of the written HTML file
///
/// # Errors
///
/// Returns [`Failure`] naming the stage that failed and its cause
pub fn convert(
    renderer: &MarkdownRenderer<'_>,
    source_dir: &Path,
    dest_dir: &Path,
    name: &str,
) -> Result<PathBuf, Failure> {
    let _span = debug_span!("convert", file = name).entered();

    let document =
        Document::read(source_dir, name).map_err(|e| Failure::new(Stage::Read, e))?;
    debug!(bytes = document.source().len(), "read");

    let html = document
        .wrapped(renderer)
        .map_err(|e| Failure::new(Stage::Render, e))?;
    debug!(bytes = html.len(), "rendered");

    let output_path = document.output_path(dest_dir);
    fs::write(&output_path, html)
        .with_context(|| format!("Failed to write {}", output_path.display()))
        .map_err(|e| Failure::new(Stage::Write, e))?;
    debug!(path = %output_path.display(), "written");

    Ok(output_path)
}

/// Converts every candidate in `source_dir` on a bounded worker pool.
///
/// A listing failure aborts the batch before any file is touched and is
/// recorded in the report. Per-file failures are isolated: the remaining
/// files are still converted. Outcomes keep listing order; completion order
/// across files is unspecified.
///
/// # Arguments
///
/// * `source_dir`: Directory scanned for markdown files
/// * `dest_dir`: Existing directory receiving HTML files
/// * `jobs`: Worker count, or `None` for one per CPU
///
/// # Errors
///
/// Returns error only if the worker pool cannot be created
pub fn convert_all(source_dir: &Path, dest_dir: &Path, jobs: Option<usize>) -> Result<BatchReport> {
    convert_all_with(source_dir, dest_dir, jobs, |_| {})
}

/// Like [`convert_all`], calling `on_done` as soon as each file finishes.
///
/// `on_done` runs on the worker that converted the file, in completion
/// order, before the batch returns.
///
/// # Errors
///
/// Returns error only if the worker pool cannot be created
pub fn convert_all_with<F>(
    source_dir: &Path,
    dest_dir: &Path,
    jobs: Option<usize>,
    on_done: F,
) -> Result<BatchReport>
where
    F: Fn(&Outcome) + Sync,
{
    let candidates = match list_candidates(source_dir) {
        Ok(candidates) => candidates,
        Err(e) => return Ok(BatchReport::listing_failed(e)),
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .thread_name(|i| format!("nsw-render-{}", i))
        .build()
        .context("Failed to start conversion workers")?;
    debug!(workers = pool.current_num_threads(), "worker pool ready");

    let outcomes = pool.install(|| {
        candidates
            .par_iter()
            .map_init(MarkdownRenderer::new, |renderer, name| {
                let result = convert(renderer, source_dir, dest_dir, name);
                let outcome = Outcome::new(name.as_str(), result);
                match outcome.failure() {
                    None => info!(file = %name, "converted"),
                    Some(failure) => info!(file = %name, stage = %failure.stage, "failed"),
                }
                on_done(&outcome);
                outcome
            })
            .collect::<Vec<_>>()
    });

    Ok(BatchReport::completed(outcomes))
}

/// Runs the batch described by `config`.
///
/// # Errors
///
/// Returns error if configuration is invalid or workers cannot start
pub fn run(config: &Config) -> Result<BatchReport> {
    run_with(config, |_| {})
}

/// Runs the batch described by `config`, reporting each finished file.
///
/// # Errors
///
/// Returns error if configuration is invalid or workers cannot start
pub fn run_with<F>(config: &Config, on_done: F) -> Result<BatchReport>
where
    F: Fn(&Outcome) + Sync,
{
    config.validate()?;
    convert_all_with(
        &config.source,
        &config.output,
        config.jobs.map(usize::from),
        on_done,
    )
}
