// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG controls the level, output goes to stderr)
// 2. Parse command-line arguments using clap
// 3. Look up the feeds of every URL given
// 4. Print them and exit with a code describing the outcome:
//      0 = every page advertised at least one feed
//      1 = some page had no feeds
//      2 = some lookup failed (or an unexpected error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use feedfind::{Finder, FinderConfig, PageFeeds};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for piping / JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let finder = Finder::new(FinderConfig::from(&cli)).context("Failed to set up HTTP client")?;
    let results = finder.find_many(&cli.urls).await;

    print_results(&results, cli.json)?;

    Ok(exit_code(&results))
}

// Prints the results either as plain lines or JSON
fn print_results(results: &[PageFeeds], json: bool) -> Result<()> {
    if json {
        let json_output =
            serde_json::to_string_pretty(results).context("Failed to serialize results")?;
        println!("{}", json_output);
        return Ok(());
    }

    // A single URL prints bare feed URLs, easy to pipe into other tools;
    // several URLs get a header line per page
    let with_headers = results.len() > 1;

    for page in results {
        if with_headers {
            println!("{}", page.url);
        }
        if let Some(error) = &page.error {
            eprintln!("Error: {}", error);
            continue;
        }
        if page.feeds.is_empty() {
            eprintln!("No feeds found at {}", page.url);
        }
        for feed in &page.feeds {
            if with_headers {
                println!("  {}", feed);
            } else {
                println!("{}", feed);
            }
        }
    }

    Ok(())
}

fn exit_code(results: &[PageFeeds]) -> i32 {
    if results.iter().any(PageFeeds::is_err) {
        2
    } else if results.iter().any(|page| page.feeds.is_empty()) {
        1
    } else {
        0
    }
}
