//! CLI for codeuw-sync.
//!
//! Mirrors `codeuw` labeled issues from the configured source repositories
//! into the aggregating repository.

use clap::{Parser, ValueEnum};
use codeuw_sync::{RunSummary, Runner, RunnerConfig, RunnerError, TrackerStrategy};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// codeuw-sync - Mirror `codeuw` labeled issues into the aggregating repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = ".codeuw-config.yml")]
    config_file: PathBuf,

    /// Log the issues that would be created without creating them.
    #[arg(long)]
    dry_run: bool,

    /// Path to the state file (keyed-state strategy only).
    #[arg(long, default_value = ".codeuw-state.mpk")]
    state_file: PathBuf,

    /// How already mirrored issues are detected.
    #[arg(long, value_enum, default_value_t = Strategy::KeyedState)]
    strategy: Strategy,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

/// Duplicate detection strategies selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Record mirrored issue numbers in the state file.
    KeyedState,
    /// Compare rendered titles with the aggregator's existing issues.
    TitleScan,
}

impl From<Strategy> for TrackerStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::KeyedState => TrackerStrategy::KeyedState,
            Strategy::TitleScan => TrackerStrategy::TitleScan,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.config_file, args.token, args.dry_run)
        .with_state_path(args.state_file)
        .with_strategy(args.strategy.into());
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Strategy: {}", summary.strategy);
    println!("  Repositories processed: {}", summary.repositories.len());
    println!("  Labeled issues: {}", summary.issues_matched());

    if summary.dry_run {
        println!("  Issues simulated: {}", summary.issues_simulated());
    } else {
        println!("  Issues created: {}", summary.issues_created());
    }
    println!("  Issues skipped: {}", summary.issues_skipped());

    if !summary.recorded.is_empty() {
        println!("\nIssues creation summary:");
        for (repo, count) in &summary.recorded {
            println!("  {repo}: {count} issues");
        }
    }
}
