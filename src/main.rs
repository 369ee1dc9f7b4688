use anyhow::Result;
use nsw_render::{BatchReport, Config, Outcome};
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects debug output
/// and the default shows warnings only.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints the console line for one finished file.
fn print_outcome(outcome: &Outcome) {
    match (outcome.output(), outcome.failure()) {
        (Some(path), _) => println!("Saved: {}", path.display()),
        (None, Some(failure)) => eprintln!("Error: {}: {}", outcome.name(), failure),
        (None, None) => {}
    }
}

/// Prints the listing failure or the closing summary.
fn print_summary(report: &BatchReport) {
    if let Some(e) = report.listing_error() {
        eprintln!("Error: {:#}", e);
        eprintln!("No files converted");
        return;
    }

    println!(
        "Converted {} of {} files",
        report.converted(),
        report.total()
    );
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);

    let report = nsw_render::run_with(&config, print_outcome)?;
    print_summary(&report);

    Ok(())
}
