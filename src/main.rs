//! Sitelight main entry point
//!
//! Command-line interface for the crawl-then-audit pipeline.

use anyhow::Context;
use clap::Parser;
use sitelight::config::{load_overrides, OutputFormat, Overrides};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitelight: crawl a site and audit every page
///
/// Crawls a website from a root URL, then runs a headless-browser audit
/// against each discovered page, writing one report file per URL into a
/// timestamped directory tree.
#[derive(Parser, Debug)]
#[command(name = "sitelight")]
#[command(version)]
#[command(about = "Crawl a site and audit every page", long_about = None)]
struct Cli {
    /// Path to a TOML file with option overrides
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root URL to crawl and audit
    #[arg(short, long)]
    url: Option<String>,

    /// Parent directory for the run's report tree
    #[arg(long, value_name = "DIR")]
    reports_directory: Option<String>,

    /// Maximum crawl depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Report format: html or json
    #[arg(long, value_name = "FORMAT")]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut overrides = match &cli.config {
        Some(path) => {
            tracing::info!("Loading overrides from: {}", path.display());
            load_overrides(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Overrides::default(),
    };

    // Flag-level overrides win over the file
    if let Some(url) = cli.url {
        overrides.url = Some(url);
    }
    if let Some(dir) = cli.reports_directory {
        overrides.reports_directory = Some(dir);
    }
    if let Some(depth) = cli.max_depth {
        overrides
            .crawl
            .get_or_insert_with(Default::default)
            .max_depth = Some(depth);
    }
    if let Some(format) = cli.output {
        let output = parse_output_format(&format)?;
        overrides
            .audit
            .get_or_insert_with(Default::default)
            .flags
            .get_or_insert_with(Default::default)
            .output = Some(output);
    }

    sitelight::run(overrides).await?;

    Ok(())
}

fn parse_output_format(format: &str) -> anyhow::Result<OutputFormat> {
    match format {
        "html" => Ok(OutputFormat::Html),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown output format '{other}' (expected html or json)"),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitelight=info,warn"),
            1 => EnvFilter::new("sitelight=debug,info"),
            2 => EnvFilter::new("sitelight=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
