mod utils;

use utils::*;

use crate::selectors::{BODY_SELECTOR, HIDDEN_TAGS};
use crate::tools::clean::truncate_chars;
use crate::tools::types::{Jsonld, Metadata};
use scraper::{ElementRef, Html};

/// Upper bound on any extracted description.
pub const MAX_TEXT_CHARS: usize = 15_000;

/// Scrape JSON-LD from a parsed page, flattening arrays and `@graph` wrappers.
pub fn scrape_jsonld(doc: &Html) -> Jsonld {
    scrape_jsonld_scripts(doc)
}

/// Scrape `<title>` and `<meta name|property>` pairs from a parsed page.
pub fn scrape_metadata(doc: &Html) -> Metadata {
    scrape_metadata_tags(doc)
}

/// Number of visible characters on the page: text nodes outside
/// script/style/noscript/template, each trimmed, concatenated.
pub fn scrape_visible_len(doc: &Html) -> usize {
    collect_text_lines(doc.root_element(), &HIDDEN_TAGS)
        .iter()
        .map(|line| line.chars().count())
        .sum()
}

/// Text lines under `root`, skipping anything nested in one of `skip`.
pub fn scrape_text(root: ElementRef<'_>, skip: &[&str]) -> Vec<String> {
    collect_text_lines(root, skip)
}

/// Body text with the given tags removed, newline-joined and capped.
pub fn scrape_body_text(doc: &Html, skip: &[&str]) -> String {
    let root = doc
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| doc.root_element());
    truncate_chars(&collect_text_lines(root, skip).join("\n"), MAX_TEXT_CHARS)
}

/// Strip tags from an HTML fragment: one line per text node, capped at
/// [`MAX_TEXT_CHARS`].
///
/// # Examples
/// ```
/// use jobscrape::tools::scrape::html_to_text;
///
/// let text = html_to_text("<h3>About</h3><p>Build   things</p><script>x()</script>");
/// assert_eq!(text, "About\nBuild things");
/// ```
pub fn html_to_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let doc = Html::parse_fragment(html);
    truncate_chars(
        &collect_text_lines(doc.root_element(), &HIDDEN_TAGS).join("\n"),
        MAX_TEXT_CHARS,
    )
}
