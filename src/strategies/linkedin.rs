//! LinkedIn public job pages (`linkedin.com/jobs/view/<id>`), read from the
//! top card and description markup of the page fetched by the page strategy.

use super::path_segments;
use crate::selectors::{
    HIDDEN_TAGS, LINKEDIN_COMPANY_SELECTORS, LINKEDIN_DESCRIPTION_SELECTORS,
    LINKEDIN_JOB_TYPE_SELECTORS, LINKEDIN_LOCATION_SELECTORS, LINKEDIN_TITLE_SELECTORS,
};
use crate::tools::clean::{clean_line, truncate_chars};
use crate::tools::scrape::{scrape_text, MAX_TEXT_CHARS};
use crate::types::{Attempt, PartialJob, RawExtraction};
use scraper::{Html, Selector};
use url::Url;

/// Pure URL-shape test: a LinkedIn host and a `/jobs/view/<id>` path.
pub fn match_url(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let linkedin = host == "linkedin.com" || host.ends_with(".linkedin.com");
    linkedin && matches!(path_segments(url).as_slice(), ["jobs", "view", _, ..])
}

/// Top-card fields. Without a title the page is treated as unreadable.
pub fn extract(doc: &Html, url: &Url) -> Attempt {
    let Some(title) = first_text(doc, &LINKEDIN_TITLE_SELECTORS) else {
        return Attempt::failed("no LinkedIn job title");
    };

    let partial = PartialJob {
        title: Some(title),
        organization_name: first_text(doc, &LINKEDIN_COMPANY_SELECTORS),
        location: first_text(doc, &LINKEDIN_LOCATION_SELECTORS),
        job_type: first_text(doc, &LINKEDIN_JOB_TYPE_SELECTORS).map(|t| t.to_lowercase()),
        application_url: Some(url.to_string()),
        ..Default::default()
    };
    Attempt::Success(RawExtraction::new(partial, description(doc)))
}

/// Text of the first element matched by the earliest selector that matches.
fn first_text(doc: &Html, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        doc.select(selector)
            .next()
            .map(|el| clean_line(&el.text().collect::<Vec<_>>().join(" ")))
            .filter(|text| !text.is_empty())
    })
}

fn description(doc: &Html) -> String {
    LINKEDIN_DESCRIPTION_SELECTORS
        .iter()
        .find_map(|selector| doc.select(selector).next())
        .map(|el| truncate_chars(&scrape_text(el, &HIDDEN_TAGS).join("\n"), MAX_TEXT_CHARS))
        .unwrap_or_default()
}
