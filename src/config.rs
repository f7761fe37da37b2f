// src/config.rs
// =============================================================================
// Settings for the HTTP side of a lookup.
//
// The discovery walk itself has no knobs; everything configurable lives in
// the transport: how long to wait, how many redirects to follow, what to
// send as User-Agent, and how big a page we are willing to read.
// =============================================================================

use std::time::Duration;

/// Default request timeout (matches what the CLI advertises)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of redirects to follow before giving up
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default cap on the response body: 5MB is plenty for any HTML page
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// HTTP client settings used by [`crate::Finder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Timeout for the whole request, connect through body
    pub timeout: Duration,
    /// Redirects to follow; 0 disables redirects
    pub max_redirects: usize,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Bodies larger than this fail with FetchError::TooLarge
    pub max_body_bytes: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

// "feedfind/0.1.0" - env! is filled in by cargo at compile time
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
