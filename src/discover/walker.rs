// src/discover/walker.rs
// =============================================================================
// The feed discovery walk.
//
// How it works:
// 1. Start at the <html> element with the page URL as the base URL
// 2. Visit elements depth-first, in document order
// 3. For each element, apply the rule for its tag:
//      <link>  autodiscovery link? resolve its href and keep it,
//              otherwise skip the link's children
//      <base>  replace the base URL for everything that follows
//      <a>     href path ends in .rss/.xml/.rdf? keep it
//      head-ish tags (meta, title, script, ...) pass straight through
//      anything else: if we already found a feed, stop the whole walk
// 4. Return the feeds in the order we found them (duplicates included)
//
// The stop rule assumes that once real page content starts after the feed
// links, there is nothing left worth scanning.
//
// Rust concepts:
// - ControlFlow: A Continue/Break value the recursion passes back up
// - Borrowing: The walk only reads the tree, it never owns or changes it
// =============================================================================

use std::ops::ControlFlow;

use scraper::node::Element;
use scraper::{ElementRef, Html};
use tracing::{debug, trace};
use url::Url;

use super::resolve::resolve;
use super::rules::{is_feed_url, is_ignored_tag, match_link_tag, LinkTag};

/// Collects feed URLs from a parsed document.
///
/// `base` is the URL the page was fetched from; a `<base href>` in the
/// document overrides it for the rest of the walk. Never fails: elements
/// that can't be interpreted are skipped.
pub fn discover_feeds(document: &Html, base: &Url) -> Vec<String> {
    let mut walk = Walk {
        base: base.clone(),
        feeds: Vec::new(),
    };

    if walk.visit(document.root_element()).is_break() {
        trace!(found = walk.feeds.len(), "Stopped at page content");
    }

    walk.feeds
}

/// Parses `html` and collects its feed URLs, resolving against `page_url`.
///
/// # Errors
///
/// Returns an error if `page_url` is not an absolute URL.
pub fn discover_feeds_in_html(html: &str, page_url: &str) -> Result<Vec<String>, url::ParseError> {
    let base = Url::parse(page_url)?;
    let document = Html::parse_document(html);
    Ok(discover_feeds(&document, &base))
}

// What to do after applying the rule for one element
enum Step {
    Descend,
    SkipSubtree,
    Stop,
}

// State for one walk. Each discover_feeds call gets its own, so nothing
// leaks between lookups.
struct Walk {
    base: Url,
    feeds: Vec<String>,
}

impl Walk {
    fn visit(&mut self, element: ElementRef<'_>) -> ControlFlow<()> {
        match self.apply_rule(element.value()) {
            Step::Descend => {}
            Step::SkipSubtree => return ControlFlow::Continue(()),
            Step::Stop => return ControlFlow::Break(()),
        }

        // Text and comment nodes have no children and no rule, so only
        // element children need visiting
        for child in element.children().filter_map(ElementRef::wrap) {
            self.visit(child)?;
        }

        ControlFlow::Continue(())
    }

    fn apply_rule(&mut self, element: &Element) -> Step {
        match element.name() {
            "link" => match match_link_tag(element) {
                LinkTag::Feed(href) => {
                    if let Some(url) = resolve(&self.base, href) {
                        self.push(url);
                    }
                    Step::Descend
                }
                LinkTag::NotFeed => Step::SkipSubtree,
            },
            "base" => {
                if let Some(base) = element.attr("href").and_then(|href| resolve(&self.base, href)) {
                    trace!(base = %base, "Base URL changed");
                    self.base = base;
                }
                Step::Descend
            }
            "a" => {
                let Some(href) = element.attr("href") else {
                    return Step::SkipSubtree;
                };
                if let Some(url) = resolve(&self.base, href) {
                    if is_feed_url(url.path()) {
                        self.push(url);
                    }
                }
                Step::Descend
            }
            name if is_ignored_tag(name) => Step::Descend,
            name => {
                if self.feeds.is_empty() {
                    Step::Descend
                } else {
                    trace!(tag = name, "Reached page content");
                    Step::Stop
                }
            }
        }
    }

    fn push(&mut self, url: Url) {
        debug!(feed = %url, "Found feed candidate");
        self.feeds.push(url.into());
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. A <link> that isn't a feed link, or an <a> without href, skips its
//    children
//    - In HTML both are childless; only SVG/MathML content can nest
//      elements under a <link>
//    - It only applies to these two tags, <base> always descends
//
// 2. Why is the base URL cloned?
//    - The walk may replace it when it meets <base href>
//    - The caller's Url stays untouched, and two walks never share one
//
// 3. What does `self.visit(child)?` do with a ControlFlow?
//    - ControlFlow::Break short-circuits like an Err would
//    - So once one element says "stop", every level above returns at once
//      and no further sibling is visited
// -----------------------------------------------------------------------------
