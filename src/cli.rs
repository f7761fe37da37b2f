// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   feedfind https://blog.example/
//   feedfind --json https://a.example/ https://b.example/
// =============================================================================

use std::time::Duration;

use clap::Parser;
use feedfind::config::{default_user_agent, DEFAULT_MAX_BODY_BYTES};
use feedfind::FinderConfig;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "feedfind",
    version,
    about = "Find the RSS/Atom/RDF feeds an HTML page advertises",
    long_about = "feedfind fetches each page, reads its <link rel=\"alternate\"> autodiscovery tags \
                  and feed-looking <a> links, and prints the feed URLs it finds in page order."
)]
pub struct Cli {
    /// Page URL(s) to look up (e.g., https://blog.example/)
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Output results in JSON format instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Maximum number of redirects to follow (0 = don't follow)
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub max_redirects: usize,

    /// User-Agent header to send (default: feedfind/<version>)
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Give up on pages larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, value_name = "N")]
    pub max_body_bytes: usize,
}

impl From<&Cli> for FinderConfig {
    fn from(cli: &Cli) -> Self {
        FinderConfig {
            timeout: Duration::from_secs(cli.timeout),
            max_redirects: cli.max_redirects,
            user_agent: cli.user_agent.clone().unwrap_or_else(default_user_agent),
            max_body_bytes: cli.max_body_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_defaults() {
        let cli = Cli::try_parse_from(["feedfind", "https://blog.example/"]).unwrap();
        assert_eq!(cli.urls, vec!["https://blog.example/"]);
        assert!(!cli.json);
        assert_eq!(FinderConfig::from(&cli), FinderConfig::default());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "feedfind",
            "--json",
            "--timeout",
            "3",
            "--max-redirects",
            "0",
            "--user-agent",
            "test-agent",
            "--max-body-bytes",
            "1024",
            "https://a.example/",
            "https://b.example/",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.urls.len(), 2);

        let config = FinderConfig::from(&cli);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.max_redirects, 0);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["feedfind"]).is_err());
    }
}
