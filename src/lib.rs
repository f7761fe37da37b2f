// src/lib.rs
// =============================================================================
// feedfind: discover the RSS/Atom/RDF feeds an HTML page advertises.
//
// The pipeline:
// 1. Fetch the page over HTTP (fetch module)
// 2. Parse the body into a DOM tree (document module)
// 3. Walk the tree and collect feed URLs (discover module)
//
// The finder module ties the three steps together. Most callers only need:
//
//     let feeds = feedfind::find("https://blog.example/").await?;
//
// Rust concepts:
// - Library crates: The CLI in main.rs is just one user of this API
// - pub use: Re-export the important items at the crate root
// =============================================================================

pub mod config;
pub mod discover;
pub mod document;
pub mod error;
pub mod fetch;
pub mod finder;

pub use config::FinderConfig;
pub use discover::{discover_feeds, discover_feeds_in_html};
pub use error::{FetchError, FindError, ParseError};
pub use finder::{find, Finder, PageFeeds};
