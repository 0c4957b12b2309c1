use serde::{Deserialize, Serialize};

/// Extract JobPosting result.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractJobPostingResult {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub salary: Option<String>,
    /// Plain text, tags stripped. Empty when the posting has none.
    #[serde(default)]
    pub description: String,
}

/// Extract page metadata result.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractPageMetaResult {
    /// `og:title`, else `<title>`.
    pub title: Option<String>,
    /// `og:site_name`.
    pub site_name: Option<String>,
}
