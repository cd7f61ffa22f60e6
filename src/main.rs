//! Linktrawl main entry point
//!
//! Command-line interface for the time-boxed link crawler.

use anyhow::Context;
use clap::Parser;
use linktrawl::config::load_config;
use linktrawl::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linktrawl: a time-boxed, multi-worker link crawler
///
/// Linktrawl crawls outward from a seed page for a fixed time budget,
/// persisting its frontier and per-page timings to plain text files. With a
/// tally marker configured it also ranks profile links by occurrence count.
#[derive(Parser, Debug)]
#[command(name = "linktrawl")]
#[command(version = "1.0.0")]
#[command(about = "A time-boxed, multi-worker link crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    let report = crawl(config).await.context("crawl failed")?;
    println!("Crawled {} links", report.crawled);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linktrawl=info,warn"),
            1 => EnvFilter::new("linktrawl=debug,info"),
            2 => EnvFilter::new("linktrawl=trace,debug"),
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

/// Prints the effective configuration without crawling
fn print_dry_run(config: &linktrawl::config::Config) {
    println!("=== Linktrawl Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Workers: {}", config.crawler.workers);
    println!("  Time budget: {}s", config.crawler.time_budget_secs);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!("  Worker delay: {}ms", config.crawler.worker_delay_ms);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nPolicy:");
    println!("  Crawl marker: {:?}", config.policy.crawl_marker);
    match &config.policy.tally_marker {
        Some(marker) => println!("  Tally marker: {:?}", marker),
        None => println!("  Tally marker: (disabled)"),
    }
    println!("  Exclude marker: {:?}", config.policy.exclude_marker);

    println!("\nOutput:");
    println!("  Queued file: {}", config.output.queued_path);
    println!("  Crawled file: {}", config.output.crawled_path);
    if let Some(tally_path) = &config.output.tally_path {
        println!("  Tally file: {}", tally_path);
    }

    println!("\nSeeds ({}):", config.seed.urls.len());
    for seed in &config.seed.urls {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}
