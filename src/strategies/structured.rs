//! schema.org JobPosting embedded as JSON-LD.

use crate::tools::extract::{extract_job_postings, org_from_host, ExtractJobPostingResult};
use crate::tools::scrape::scrape_jsonld;
use crate::types::{Attempt, PartialJob, RawExtraction, DEFAULT_TITLE};
use scraper::Html;
use url::Url;

/// Look for the first JobPosting on an already-parsed page.
///
/// A posting with neither a description nor a real title is treated as a
/// failure so the heuristic extractor gets a turn.
pub fn extract(doc: &Html, url: &Url) -> Attempt {
    let jsonld = scrape_jsonld(doc);
    let Some(posting) = extract_job_postings(&jsonld).into_iter().next() else {
        return Attempt::failed("no JobPosting structured data");
    };

    let raw = to_raw(posting, url);
    if accepted(&raw) {
        Attempt::Success(raw)
    } else {
        Attempt::failed("JobPosting has no title or description")
    }
}

fn to_raw(posting: ExtractJobPostingResult, url: &Url) -> RawExtraction {
    let partial = PartialJob {
        title: Some(posting.title.unwrap_or_else(|| DEFAULT_TITLE.to_string())),
        organization_name: Some(posting.organization.unwrap_or_else(|| org_from_host(url))),
        location: posting.location,
        job_type: posting.employment_type,
        salary_range: posting.salary,
        application_url: Some(url.to_string()),
        ..Default::default()
    };
    RawExtraction::new(partial, posting.description)
}

fn accepted(raw: &RawExtraction) -> bool {
    !raw.description.is_empty() || raw.job.title.as_deref() != Some(DEFAULT_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(jsonld: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><head><script type="application/ld+json">{jsonld}</script></head><body></body></html>"#
        ))
    }

    fn url() -> Url {
        Url::parse("https://careers.widgets.example/jobs/42").unwrap()
    }

    #[test]
    fn minimal_posting_is_rejected() {
        let attempt = extract(&page(r#"{"@type":"JobPosting"}"#), &url());
        assert!(matches!(attempt, Attempt::Failed(_)));
    }

    #[test]
    fn generic_title_with_description_is_accepted() {
        let jsonld =
            r#"{"@type":"JobPosting","title":"Job Listing","description":"<p>Real work</p>"}"#;
        let attempt = extract(&page(jsonld), &url());
        assert!(attempt.is_success());
    }

    #[test]
    fn page_without_structured_data_fails() {
        let doc = Html::parse_document("<html><body><p>hello</p></body></html>");
        assert!(matches!(extract(&doc, &url()), Attempt::Failed(_)));
    }

    #[test]
    fn maps_posting_inside_graph() {
        let doc = page(
            r#"{"@context":"https://schema.org","@graph":[
                {"@type":"WebSite","name":"Widgets"},
                {"@type":"JobPosting","title":"Support Lead",
                 "hiringOrganization":{"@type":"Organization","name":"Widgets Co"},
                 "employmentType":"PART_TIME",
                 "jobLocation":{"@type":"Place","address":{"addressLocality":"Austin","addressRegion":"TX","addressCountry":"US"}},
                 "baseSalary":{"@type":"MonetaryAmount","currency":"USD","value":{"@type":"QuantitativeValue","minValue":40,"maxValue":55,"unitText":"HOUR"}},
                 "description":"&lt;p&gt;Help customers&lt;/p&gt;"}
            ]}"#,
        );
        let Attempt::Success(raw) = extract(&doc, &url()) else {
            panic!("expected success");
        };
        assert_eq!(raw.job.title.as_deref(), Some("Support Lead"));
        assert_eq!(raw.job.organization_name.as_deref(), Some("Widgets Co"));
        assert_eq!(raw.job.job_type.as_deref(), Some("part_time"));
        assert_eq!(raw.job.location.as_deref(), Some("Austin, TX, US"));
        assert_eq!(raw.job.salary_range.as_deref(), Some("USD 40–55"));
        assert_eq!(raw.description, "Help customers");
    }

    #[test]
    fn organization_defaults_to_host() {
        let doc = page(r#"{"@type":"JobPosting","title":"Chef"}"#);
        let Attempt::Success(raw) = extract(&doc, &url()) else {
            panic!("expected success");
        };
        assert_eq!(raw.job.organization_name.as_deref(), Some("Careers"));
    }
}
