//! Term-Ripple main entry point
//!
//! This is the command-line interface for the Term-Ripple term crawler.

use clap::Parser;
use std::path::PathBuf;
use term_ripple::config::{load_config_with_hash, validate, Config};
use term_ripple::crawler::run_crawl;
use term_ripple::output::print_report;
use tracing_subscriber::EnvFilter;

/// Term-Ripple: a single-domain term crawler
///
/// Term-Ripple crawls one hostname up to a fixed link depth and reports every
/// occurrence of a search term, with surrounding context, on each page.
#[derive(Parser, Debug)]
#[command(name = "term-ripple")]
#[command(version)]
#[command(about = "A single-domain term crawler", long_about = None)]
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

    /// Override the search term from the config file
    #[arg(long)]
    term: Option<String>,

    /// Override the maximum crawl depth from the config file
    #[arg(long)]
    max_depth: Option<u32>,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let mut config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(term) = cli.term {
        config.search.term = term;
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    validate(&config)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let report = run_crawl(config).await.map_err(|e| {
        tracing::error!("Crawl failed: {}", e);
        e
    })?;
    print_report(&report);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("term_ripple=info,warn"),
            1 => EnvFilter::new("term_ripple=debug,info"),
            2 => EnvFilter::new("term_ripple=trace,debug"),
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

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Term-Ripple Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Domain: {}", config.crawler.domain);
    println!("  Start URL: {}", config.base_url());
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Timeout: {}ms", config.crawler.timeout);
    if let Some(user_agent) = &config.crawler.user_agent {
        println!("  User agent: {}", user_agent);
    }

    println!("\nSearch:");
    println!("  Term: '{}'", config.search.term);
    println!("  Context chars: {}", config.search.context_chars);

    println!("\n✓ Configuration is valid");
}
