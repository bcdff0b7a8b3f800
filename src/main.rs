//! CLI entry point for `extract-report`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use extract_report::aggregate::summary::ReferenceSummary;
use extract_report::classifier::catalog::ScenarioCatalog;
use extract_report::classifier::cte::KnownCteSet;
use extract_report::input::loader::{self, DEFAULT_INPUT_PATH};
use extract_report::output::{formatter, report};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "extract-report",
    about = "Summarize extracted SQL table references and check them against expected scenarios"
)]
struct Cli {
    /// JSON output of the table extractor
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Print verbose diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let ctes = KnownCteSet::builtin();
    let catalog = ScenarioCatalog::builtin();

    // Stage 1: Load
    let references = match loader::load_references(&cli.input) {
        Ok(references) => references,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    // Stage 2: Aggregate
    let summary = ReferenceSummary::from_references(&references, &ctes);
    debug!(
        total = summary.total_count,
        unique = summary.unique_keys.len(),
        databases = summary.observed_databases.len(),
        "aggregated references"
    );

    // Stage 3: Classify
    let verdicts = catalog.classify(&references, &ctes);
    let failed = verdicts.iter().filter(|v| !v.passed).count();
    debug!(scenarios = verdicts.len(), failed, "classified scenarios");

    // Stage 4: Render
    let text = report::build_report(&summary, &verdicts, &ctes);
    if let Err(e) = formatter::print_report(&text) {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}
