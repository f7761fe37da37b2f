// src/error.rs
// =============================================================================
// Error types for the library.
//
// A lookup can fail at exactly three points, and each gets its own variant
// in FindError so callers can tell them apart:
// - Fetch: the page could not be retrieved
// - Parse: the body is not an HTML document
// - Url:   the page URL itself is not a valid absolute URL
//
// Nothing inside the tree walk is an error. Missing attributes or bad hrefs
// are skipped silently, so once a page is fetched and parsed we always get
// a (possibly empty) list back.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - #[source]: Keeps the underlying cause available via Error::source()
// =============================================================================

use thiserror::Error;

/// Errors returned by [`crate::Finder::find`].
#[derive(Debug, Error)]
pub enum FindError {
    /// The page could not be retrieved
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    /// The body could not be parsed as HTML
    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
    /// The page URL could not be used as a base URL
    #[error("invalid page URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl FindError {
    /// The page URL the failed lookup was for.
    pub fn url(&self) -> &str {
        match self {
            FindError::Fetch { url, .. } | FindError::Parse { url, .. } | FindError::Url { url, .. } => {
                url
            }
        }
    }
}

/// Transport-level failures while retrieving a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed from the configuration
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Network-level error (DNS, connection, TLS, timeout, redirect loop, etc.)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body exceeded the configured size limit
    #[error("response body larger than {limit} bytes")]
    TooLarge { limit: usize },
}

/// Failures turning a response body into a DOM tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body contains binary data, so it is not an HTML document
    #[error("body is binary data (byte 0x{byte:02x} at offset {offset}), not HTML")]
    Binary { byte: u8, offset: usize },
}
