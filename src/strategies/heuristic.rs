//! Metadata and content-selector guesses for pages without structured data.

use crate::selectors::{CHROME_TAGS, CONTENT_SELECTOR_LIST, H1_SELECTOR, HIDDEN_TAGS};
use crate::tools::clean::{clean_line, truncate_chars};
use crate::tools::extract::{extract_page_meta, org_from_host};
use crate::tools::scrape::{
    scrape_body_text, scrape_metadata, scrape_text, scrape_visible_len, MAX_TEXT_CHARS,
};
use crate::types::{Attempt, PartialJob, RawExtraction, DEFAULT_TITLE};
use scraper::Html;
use url::Url;

/// Pages with less visible text than this are assumed to render client-side.
pub const CONTENT_FLOOR_CHARS: usize = 400;

/// A content-selector match must carry more text than this to be used.
pub const MIN_CANDIDATE_CHARS: usize = 300;

/// Guess title, organization and description from static markup.
///
/// Returns [`Attempt::NotApplicable`] for thin pages so the rendering
/// fallback can take over.
pub fn extract(doc: &Html, url: &Url) -> Attempt {
    if scrape_visible_len(doc) < CONTENT_FLOOR_CHARS {
        return Attempt::NotApplicable;
    }

    let meta = extract_page_meta(&scrape_metadata(doc));
    let title = meta
        .title
        .or_else(|| first_heading(doc))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let organization = meta.site_name.unwrap_or_else(|| org_from_host(url));

    let partial = PartialJob {
        title: Some(title),
        organization_name: Some(organization),
        application_url: Some(url.to_string()),
        ..Default::default()
    };
    Attempt::Success(RawExtraction::new(partial, main_text(doc)))
}

fn first_heading(doc: &Html) -> Option<String> {
    doc.select(&H1_SELECTOR)
        .next()
        .map(|h1| clean_line(&h1.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}

/// Text of the first ranked content container that is long enough, else the
/// body without navigation, header, footer and scripts.
pub fn main_text(doc: &Html) -> String {
    for selector in CONTENT_SELECTOR_LIST.iter() {
        if let Some(el) = doc.select(selector).next() {
            let text = scrape_text(el, &HIDDEN_TAGS).join("\n");
            if text.chars().count() > MIN_CANDIDATE_CHARS {
                return truncate_chars(&text, MAX_TEXT_CHARS);
            }
        }
    }
    scrape_body_text(doc, &CHROME_TAGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://www.acme-robotics.com/careers/42").unwrap()
    }

    fn page_with_visible(n: usize) -> Html {
        Html::parse_document(&format!(
            "<html><head><script>var pad = '{}';</script></head><body><p>{}</p></body></html>",
            "z".repeat(1_000),
            "a".repeat(n)
        ))
    }

    #[test]
    fn below_content_floor_is_not_applicable() {
        assert_eq!(extract(&page_with_visible(399), &url()), Attempt::NotApplicable);
    }

    #[test]
    fn at_content_floor_extracts() {
        let Attempt::Success(raw) = extract(&page_with_visible(400), &url()) else {
            panic!("expected success");
        };
        assert_eq!(raw.job.title.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(raw.job.organization_name.as_deref(), Some("Acme Robotics"));
        assert_eq!(raw.description, "a".repeat(400));
    }

    #[test]
    fn title_priority_og_then_title_then_h1() {
        let filler = "word ".repeat(100);
        let with_og = Html::parse_document(&format!(
            r#"<html><head><title>Doc Title</title><meta property="og:title" content="OG Title">
            <meta property="og:site_name" content="Acme"></head><body><h1>Heading</h1><p>{filler}</p></body></html>"#
        ));
        let Attempt::Success(raw) = extract(&with_og, &url()) else {
            panic!("expected success");
        };
        assert_eq!(raw.job.title.as_deref(), Some("OG Title"));
        assert_eq!(raw.job.organization_name.as_deref(), Some("Acme"));

        let with_title = Html::parse_document(&format!(
            "<html><head><title>Doc Title</title></head><body><h1>Heading</h1><p>{filler}</p></body></html>"
        ));
        let Attempt::Success(raw) = extract(&with_title, &url()) else {
            panic!("expected success");
        };
        assert_eq!(raw.job.title.as_deref(), Some("Doc Title"));

        let with_h1 = Html::parse_document(&format!(
            "<html><body><h1> Heading </h1><p>{filler}</p></body></html>"
        ));
        let Attempt::Success(raw) = extract(&with_h1, &url()) else {
            panic!("expected success");
        };
        assert_eq!(raw.job.title.as_deref(), Some("Heading"));
    }

    #[test]
    fn prefers_ranked_container_over_body() {
        let description = "Responsibilities include ".repeat(20);
        let html = format!(
            r#"<html><body><nav>Home</nav>
            <div class="sidebar">{}</div>
            <div class="job-description-wrapper"><p>{description}</p></div>
            </body></html>"#,
            "Other openings ".repeat(30)
        );
        let text = main_text(&Html::parse_document(&html));
        assert_eq!(text, description.trim());
    }

    #[test]
    fn short_container_falls_through_to_body() {
        let html = format!(
            r#"<html><body><nav>Menu</nav><main>Too short</main>
            <section><p>{}</p></section><footer>Legal</footer></body></html>"#,
            "Detail ".repeat(60).trim()
        );
        let text = main_text(&Html::parse_document(&html));
        assert!(text.starts_with("Too short\nDetail"));
        assert!(!text.contains("Menu"));
        assert!(!text.contains("Legal"));
    }
}
