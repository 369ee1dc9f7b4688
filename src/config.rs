//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for nsw-render.
#[derive(Debug, Clone, Parser)]
#[command(name = "nsw-render", version, about, long_about = None)]
pub struct Config {
    /// Directory holding the Markdown chapters
    #[arg(default_value = "docs/chapters")]
    pub source: PathBuf,

    /// Output directory (must already exist)
    #[arg(short, long, default_value = "rendered")]
    pub output: PathBuf,

    /// Number of conversion workers (defaults to one per CPU)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Creates configuration for the given directories with default settings.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            jobs: None,
            verbose: false,
        }
    }

    /// Validates configuration.
    ///
    /// The source directory is not checked here: a missing source is
    /// reported by the batch itself as a listing failure.
    ///
    /// # Errors
    ///
    /// Returns error if source and output resolve to the same directory.
    pub fn validate(&self) -> Result<()> {
        let source = self
            .source
            .canonicalize()
            .unwrap_or_else(|_| self.source.clone());
        let output = self
            .output
            .canonicalize()
            .unwrap_or_else(|_| self.output.clone());

        if source == output {
            bail!(
                "Output directory must differ from source directory: {}",
                self.output.display()
            );
        }

        Ok(())
    }
}
