// src/finder.rs
// =============================================================================
// The lookup pipeline: URL -> fetch -> parse -> walk -> feed URLs.
//
// A Finder owns one HTTP client and can run any number of lookups, one at
// a time or concurrently. Each lookup has its own base URL and its own
// result list, so lookups never see each other's state.
//
// Rust concepts:
// - async/await: The fetch is the only step that waits on the network
// - map_err: Attach the page URL to whichever step failed
// - Streams: buffered(N) runs several lookups at once, results in order
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::config::FinderConfig;
use crate::discover::discover_feeds;
use crate::document::parse_document;
use crate::error::{FetchError, FindError};
use crate::fetch::{build_client, fetch_page};

// How many pages find_many fetches at the same time
const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Finds the feeds advertised by `url` using the default configuration.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), feedfind::FindError> {
/// let feeds = feedfind::find("http://blog.example/").await?;
/// for feed in feeds {
///     println!("{feed}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find(url: &str) -> Result<Vec<String>, FindError> {
    let finder = Finder::new(FinderConfig::default()).map_err(|source| FindError::Fetch {
        url: url.to_string(),
        source,
    })?;
    finder.find(url).await
}

/// Outcome of one lookup, ready to be printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFeeds {
    /// The page that was looked up
    pub url: String,
    /// Feed URLs in discovery order (empty on error)
    pub feeds: Vec<String>,
    /// Why the lookup failed, if it did
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl PageFeeds {
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Runs feed lookups with a shared, configured HTTP client.
#[derive(Debug, Clone)]
pub struct Finder {
    client: Client,
    config: FinderConfig,
}

impl Finder {
    /// Creates a finder, building its HTTP client from `config`.
    pub fn new(config: FinderConfig) -> Result<Self, FetchError> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Fetches `url` and returns the feed URLs it advertises, in document
    /// order and without deduplication.
    ///
    /// # Errors
    ///
    /// - [`FindError::Url`] if `url` is not an absolute URL
    /// - [`FindError::Fetch`] if the page can't be retrieved
    /// - [`FindError::Parse`] if the body isn't an HTML document
    ///
    /// Once the page is fetched and parsed this never fails; a page with no
    /// feeds gives an empty list.
    #[instrument(level = "debug", skip(self))]
    pub async fn find(&self, url: &str) -> Result<Vec<String>, FindError> {
        let base = Url::parse(url).map_err(|source| FindError::Url {
            url: url.to_string(),
            source,
        })?;

        let body = fetch_page(&self.client, &base, self.config.max_body_bytes)
            .await
            .map_err(|source| FindError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let document = parse_document(&body).map_err(|source| FindError::Parse {
            url: url.to_string(),
            source,
        })?;

        let feeds = discover_feeds(&document, &base);
        info!(url, count = feeds.len(), "Feed discovery finished");

        Ok(feeds)
    }

    /// Looks up several pages concurrently.
    ///
    /// Results come back in the same order as `urls`; a failed lookup is
    /// reported in its `PageFeeds::error` instead of aborting the others.
    pub async fn find_many(&self, urls: &[String]) -> Vec<PageFeeds> {
        let lookups = urls.iter().map(|url| async move {
            match self.find(url).await {
                Ok(feeds) => PageFeeds {
                    url: url.clone(),
                    feeds,
                    error: None,
                },
                Err(e) => PageFeeds {
                    url: url.clone(),
                    feeds: Vec::new(),
                    error: Some(error_chain(&e)),
                },
            }
        });

        // buffered (not buffer_unordered) keeps results in input order
        stream::iter(lookups)
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect()
            .await
    }
}

// "failed to fetch X: request failed: ...: connection refused"
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[tokio::test]
    async fn test_find_invalid_url() {
        let result = find("not a url").await;
        assert!(matches!(result, Err(FindError::Url { .. })));
    }

    #[test]
    fn test_finder_keeps_its_config() {
        let config = FinderConfig {
            max_redirects: 2,
            ..FinderConfig::default()
        };
        let finder = Finder::new(config.clone()).unwrap();
        assert_eq!(finder.config(), &config);
    }

    #[tokio::test]
    async fn test_find_relative_url_is_rejected() {
        let finder = Finder::new(FinderConfig::default()).unwrap();
        let err = finder.find("/feed").await.unwrap_err();
        assert!(matches!(err, FindError::Url { .. }));
        assert_eq!(err.url(), "/feed");
    }

    #[tokio::test]
    async fn test_find_unreachable_host() {
        let finder = Finder::new(FinderConfig::default()).unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        let result = finder.find(&url).await;
        assert!(matches!(result, Err(FindError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_find_many_keeps_input_order_and_errors() {
        let finder = Finder::new(FinderConfig::default()).unwrap();
        let urls = vec!["not a url".to_string(), "also not".to_string()];
        let results = finder.find_many(&urls).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "not a url");
        assert_eq!(results[1].url, "also not");
        assert!(results.iter().all(PageFeeds::is_err));
        assert!(results.iter().all(|r| r.feeds.is_empty()));
    }

    #[test]
    fn test_error_chain_includes_cause() {
        let err = FindError::Parse {
            url: "http://x/".to_string(),
            source: ParseError::Binary { byte: 0, offset: 3 },
        };
        let text = error_chain(&err);
        assert!(text.starts_with("failed to parse http://x/"));
        assert!(text.contains("offset 3"));
        // the cause is already part of the top-level message, not repeated
        assert_eq!(text.matches("offset 3").count(), 1);
    }

    #[test]
    fn test_page_feeds_json_skips_missing_error() {
        let page = PageFeeds {
            url: "http://blog.example/".to_string(),
            feeds: vec!["http://blog.example/rss".to_string()],
            error: None,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"url":"http://blog.example/","feeds":["http://blog.example/rss"]}"#);
    }
}
