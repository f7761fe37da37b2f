// src/discover/mod.rs
// =============================================================================
// This module finds feed URLs inside a parsed HTML document.
//
// Submodules:
// - rules: Per-tag matching rules (feed MIME types, suffix pattern, etc.)
// - resolve: Turns relative hrefs into absolute URLs
// - walker: The depth-first walk that applies the rules to every element
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod resolve;
mod rules;
mod walker;

pub use resolve::resolve;
pub use rules::{is_feed_mime, is_feed_url, match_link_tag, LinkTag, FEED_MIME_TYPES, IGNORED_TAGS};
pub use walker::{discover_feeds, discover_feeds_in_html};
