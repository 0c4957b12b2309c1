//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for JSON-LD script tags.
pub static JSONLD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("valid jsonld selector")
});

/// Selector for `<body>` elements.
pub static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("valid body selector"));

/// Selector for `<title>` tags.
pub static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

/// Selector for first-level headings.
pub static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));

/// Selector for metadata tags with name/property attributes.
pub static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name], meta[property]").expect("valid metadata selector"));

/// Job-description containers used by common ATS and job boards, best first.
pub const CONTENT_SELECTORS: [&str; 13] = [
    ".job-description",
    "#job-description",
    "[class*='job-desc']",
    "[id*='job-desc']",
    ".posting-content",
    "#posting-content",
    ".content-intro",
    ".jobsearch-jobDescriptionText",
    "[role='main']",
    "main",
    "article",
    ".content",
    "#content",
];

/// Parsed [`CONTENT_SELECTORS`], same order.
pub static CONTENT_SELECTOR_LIST: Lazy<Vec<Selector>> = Lazy::new(|| {
    CONTENT_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid content selector"))
        .collect()
});

fn parse_all(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| Selector::parse(s).expect("valid linkedin selector"))
        .collect()
}

/// LinkedIn public job page top card and description, each list best first.
pub static LINKEDIN_TITLE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    parse_all(&["h1.top-card-layout__title", "h1.topcard__title", "h2.topcard__title"])
});

pub static LINKEDIN_COMPANY_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    parse_all(&[
        "a.topcard__org-name-link",
        "span.topcard__flavor",
        "a.top-card-layout__company-info",
    ])
});

pub static LINKEDIN_LOCATION_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    parse_all(&["span.topcard__flavor.topcard__flavor--bullet", "span.top-card-layout__location"])
});

pub static LINKEDIN_JOB_TYPE_SELECTORS: Lazy<Vec<Selector>> =
    Lazy::new(|| parse_all(&["span.description__job-criteria-text"]));

pub static LINKEDIN_DESCRIPTION_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    parse_all(&["div.description__text", "div.show-more-less-html__markup"])
});

/// Elements whose text is never visible.
pub const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Page chrome dropped before the whole-body fallback.
pub const CHROME_TAGS: [&str; 6] = ["nav", "header", "footer", "script", "style", "noscript"];
