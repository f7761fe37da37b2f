// src/discover/rules.rs
// =============================================================================
// The matching rules used by the walker.
//
// Two ways a page can point at a feed:
// - Autodiscovery: <link rel="alternate" type="application/rss+xml" href=...>
// - A plain <a href=...> whose path ends in .rss, .xml or .rdf
//
// Plus the set of tags we walk straight through while still in the
// <head>-like part of the page.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::Element;

/// Content types that identify a feed in a `<link type=...>` attribute.
pub const FEED_MIME_TYPES: [&str; 6] = [
    "application/x.atom+xml",
    "application/atom+xml",
    "application/xml",
    "text/xml",
    "application/rss+xml",
    "application/rdf+xml",
];

/// Tags that don't end the head section of a page.
pub const IGNORED_TAGS: [&str; 7] = ["meta", "isindex", "title", "script", "style", "head", "html"];

// The patterns are constants known to be valid, so unwrap() can only fail
// on a programmer error.
static FEED_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(?:rss|xml|rdf)$").unwrap());

// HTML whitespace: space, tab, newline, form feed, carriage return
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n\x0C\r]+").unwrap());

/// What a `<link>` element turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTag<'a> {
    /// A feed link; holds the href exactly as written in the document
    Feed(&'a str),
    /// Anything else, including a link missing rel, type or href
    NotFeed,
}

/// Checks a `<link>` element against the autodiscovery convention.
///
/// The element is a feed link when its trimmed `type` is one of
/// [`FEED_MIME_TYPES`] and its `rel` tokens include `alternate` or
/// `service.feed`.
pub fn match_link_tag(element: &Element) -> LinkTag<'_> {
    let Some(rel) = element.attr("rel") else {
        return LinkTag::NotFeed;
    };
    let Some(mime) = element.attr("type") else {
        return LinkTag::NotFeed;
    };
    let Some(href) = element.attr("href") else {
        return LinkTag::NotFeed;
    };

    let is_alternate = SPACES
        .split(rel)
        .any(|token| token == "alternate" || token == "service.feed");

    if is_alternate && is_feed_mime(mime) {
        LinkTag::Feed(href)
    } else {
        LinkTag::NotFeed
    }
}

/// True if `mime` (ignoring surrounding whitespace) is a known feed type.
///
/// The comparison is case-sensitive.
pub fn is_feed_mime(mime: &str) -> bool {
    FEED_MIME_TYPES.contains(&mime.trim())
}

/// True if a URL path ends in `.rss`, `.xml` or `.rdf` (case-sensitive).
pub fn is_feed_url(path: &str) -> bool {
    FEED_SUFFIX.is_match(path)
}

pub(crate) fn is_ignored_tag(name: &str) -> bool {
    IGNORED_TAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    // Parses a fragment and hands the first <link> to the closure
    fn with_link<T>(markup: &str, check: impl FnOnce(&Element) -> T) -> T {
        let html = Html::parse_document(markup);
        let selector = Selector::parse("link").unwrap();
        let link = html.select(&selector).next().expect("no <link> in markup");
        check(link.value())
    }

    #[test]
    fn test_rss_alternate_link() {
        let tag = with_link(
            r#"<link rel="alternate" type="application/rss+xml" href="/feed">"#,
            |el| match_link_tag(el) == LinkTag::Feed("/feed"),
        );
        assert!(tag);
    }

    #[test]
    fn test_service_feed_rel() {
        let tag = with_link(
            r#"<link rel="service.feed" type="application/atom+xml" href="atom.xml">"#,
            |el| match_link_tag(el) == LinkTag::Feed("atom.xml"),
        );
        assert!(tag);
    }

    #[test]
    fn test_rel_with_several_tokens() {
        let tag = with_link(
            "<link rel=\"home \t alternate\" type=\"application/rdf+xml\" href=\"index.rdf\">",
            |el| match_link_tag(el) == LinkTag::Feed("index.rdf"),
        );
        assert!(tag);
    }

    #[test]
    fn test_html_alternate_is_not_a_feed() {
        let tag = with_link(
            r#"<link rel="alternate" type="text/html" href="/en/">"#,
            |el| match_link_tag(el) == LinkTag::NotFeed,
        );
        assert!(tag);
    }

    #[test]
    fn test_stylesheet_is_not_a_feed() {
        let tag = with_link(
            r#"<link rel="stylesheet" type="text/xml" href="/style.xml">"#,
            |el| match_link_tag(el) == LinkTag::NotFeed,
        );
        assert!(tag);
    }

    #[test]
    fn test_alternate_must_be_a_whole_token() {
        let tag = with_link(
            r#"<link rel="alternates" type="application/rss+xml" href="/feed">"#,
            |el| match_link_tag(el) == LinkTag::NotFeed,
        );
        assert!(tag);
    }

    #[test]
    fn test_missing_attributes() {
        for markup in [
            r#"<link type="application/rss+xml" href="/feed">"#,
            r#"<link rel="alternate" href="/feed">"#,
            r#"<link rel="alternate" type="application/rss+xml">"#,
        ] {
            let not_feed = with_link(markup, |el| match_link_tag(el) == LinkTag::NotFeed);
            assert!(not_feed, "{markup}");
        }
    }

    #[test]
    fn test_href_is_returned_untouched() {
        let tag = with_link(
            r#"<link rel="alternate" type="application/rss+xml" href="  ../a b.xml">"#,
            |el| match_link_tag(el) == LinkTag::Feed("  ../a b.xml"),
        );
        assert!(tag);
    }

    #[test]
    fn test_feed_mime_is_trimmed_but_case_sensitive() {
        assert!(is_feed_mime(" application/rss+xml\n"));
        assert!(is_feed_mime("application/x.atom+xml"));
        assert!(!is_feed_mime("Application/RSS+XML"));
        assert!(!is_feed_mime("application/json"));
        assert!(!is_feed_mime(""));
    }

    #[test]
    fn test_feed_url_suffix() {
        assert!(is_feed_url("/archive.rss"));
        assert!(is_feed_url("/blog/atom.xml"));
        assert!(is_feed_url("/index.rdf"));
        assert!(!is_feed_url("/feed"));
        assert!(!is_feed_url("/feed.RSS"));
        assert!(!is_feed_url("/feed.xml/"));
        assert!(!is_feed_url("/rss"));
    }

    #[test]
    fn test_ignored_tags() {
        assert!(is_ignored_tag("head"));
        assert!(is_ignored_tag("script"));
        assert!(!is_ignored_tag("body"));
        assert!(!is_ignored_tag("link"));
    }
}
