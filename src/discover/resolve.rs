// src/discover/resolve.rs
// =============================================================================
// Resolves a possibly-relative href against the current base URL.
//
// Examples (base = "https://example.com/blog/"):
//   "feed.xml"               -> https://example.com/blog/feed.xml
//   "/rss"                   -> https://example.com/rss
//   "../index.rdf"           -> https://example.com/index.rdf
//   "//cdn.example.com/a"    -> https://cdn.example.com/a
//   "https://other.com/feed" -> https://other.com/feed
//   "http://[bad"            -> None
// =============================================================================

use url::Url;

/// Resolves `reference` against `base`, or `None` if it isn't a valid URL
/// reference.
///
/// Failing here never fails a lookup; the caller just drops the href.
pub fn resolve(base: &Url, reference: &str) -> Option<Url> {
    // join() handles both cases: an absolute reference replaces the base,
    // a relative one inherits scheme/host/path from it
    base.join(reference).ok()
}
