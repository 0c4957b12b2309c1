pub mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use types::*;
pub use utils::{json_str, scalar_string};
use utils::*;

use crate::tools::clean::title_case;
use crate::tools::types::{Jsonld, Metadata};
use url::Url;

/// Extract every JobPosting item from parsed JSON-LD data, in page order.
///
/// The `@type` match is case-insensitive and accepts type arrays
/// (`["JobPosting", "Thing"]`).
///
/// ## Examples
/// ```ignore
/// let postings = extract_job_postings(&jsonld);
/// let first = postings.first();
/// ```
pub fn extract_job_postings(jsonld: &Jsonld) -> Vec<ExtractJobPostingResult> {
    find_jsonld_type(jsonld, "JobPosting")
        .into_iter()
        .map(extract_job_posting_fields)
        .collect()
}

/// Extract title and site name from page metadata.
pub fn extract_page_meta(metadata: &Metadata) -> ExtractPageMetaResult {
    ExtractPageMetaResult {
        title: find_metadata_value(metadata, &["og:title", "title"]),
        site_name: find_metadata_value(metadata, &["og:site_name"]),
    }
}

/// Guess an organization name from a host: drop `www.`, keep the first DNS
/// label, hyphens to spaces, title-case.
///
/// # Examples
/// ```
/// use jobscrape::tools::extract::org_from_host;
/// use url::Url;
///
/// let url = Url::parse("https://www.big-widgets.example.com/jobs/1").unwrap();
/// assert_eq!(org_from_host(&url), "Big Widgets");
/// ```
pub fn org_from_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().replace("www.", "");
    let label = host.split('.').next().unwrap_or_default();
    title_case(&label.replace('-', " "))
}

/// Title-case a URL slug (`acme-labs` → `Acme Labs`).
pub fn org_from_slug(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}
