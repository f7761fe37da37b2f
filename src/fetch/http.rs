// src/fetch/http.rs
// =============================================================================
// This module downloads a page with an HTTP GET.
//
// Key functionality:
// - Builds one reqwest Client from FinderConfig (timeout, redirects, UA)
// - Streams the body chunk by chunk so oversized pages fail early
// - Wraps any transport failure as FetchError, no retries
//
// Note that the HTTP status code is NOT checked. A 404 page is still an
// HTML page, and whatever feed links it carries are reported like any other.
//
// Rust concepts:
// - async/await: For non-blocking network I/O
// - Streams: bytes_stream() yields the body as it arrives
// =============================================================================

use futures::StreamExt; // StreamExt gives us .next() on streams
use reqwest::{redirect, Client};
use tracing::debug;
use url::Url;

use crate::config::FinderConfig;
use crate::error::FetchError;

// Creates an HTTP client from the configuration
//
// We build this once per Finder and reuse it for every request
// (connection pooling). Cloning a Client is cheap.
pub fn build_client(config: &FinderConfig) -> Result<Client, FetchError> {
    let redirect_policy = if config.max_redirects == 0 {
        redirect::Policy::none()
    } else {
        redirect::Policy::limited(config.max_redirects)
    };

    Client::builder()
        .timeout(config.timeout)
        .redirect(redirect_policy)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)
}

// Fetches a page and returns its raw body
//
// Parameters:
//   client: reqwest HTTP client (borrowed, the caller owns it)
//   url: absolute URL of the page
//   max_body_bytes: refuse bodies larger than this
//
// The response is consumed by bytes_stream() and dropped when this function
// returns, on the error paths too, which releases the connection.
pub async fn fetch_page(
    client: &Client,
    url: &Url,
    max_body_bytes: usize,
) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url.clone()).send().await?;

    debug!(
        url = %url,
        final_url = %response.url(),
        status = response.status().as_u16(),
        "Received response"
    );

    // Fast path: Content-Length already tells us it's too big
    if let Some(len) = response.content_length() {
        if len > max_body_bytes as u64 {
            return Err(FetchError::TooLarge {
                limit: max_body_bytes,
            });
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if body.len().saturating_add(chunk.len()) > max_body_bytes {
            return Err(FetchError::TooLarge {
                limit: max_body_bytes,
            });
        }
        body.extend_from_slice(&chunk);
    }

    debug!(url = %url, bytes = body.len(), "Read response body");

    Ok(body)
}
