use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Job Listing";
pub const DEFAULT_JOB_TYPE: &str = "full-time";

/// Normalized job posting. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub organization_name: String,
    pub organization_logo: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: String,
    pub expires_at: String,
    pub application_email: String,
    pub application_url: String,
    pub application_instructions: String,
    pub requirements: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub views_count: u64,
}

impl JobRecord {
    /// `created_at` as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn created_at_iso(&self) -> String {
        self.created_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// Whatever a strategy could determine about a posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialJob {
    pub title: Option<String>,
    pub organization_name: Option<String>,
    pub organization_logo: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
    pub expires_at: Option<String>,
    pub application_email: Option<String>,
    pub application_url: Option<String>,
    pub application_instructions: Option<String>,
    pub requirements: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub views_count: Option<u64>,
}

impl From<JobRecord> for PartialJob {
    fn from(r: JobRecord) -> Self {
        Self {
            title: Some(r.title),
            organization_name: Some(r.organization_name),
            organization_logo: Some(r.organization_logo),
            location: Some(r.location),
            job_type: Some(r.job_type),
            salary_range: Some(r.salary_range),
            expires_at: Some(r.expires_at),
            application_email: Some(r.application_email),
            application_url: Some(r.application_url),
            application_instructions: Some(r.application_instructions),
            requirements: Some(r.requirements),
            created_at: Some(r.created_at),
            views_count: Some(r.views_count),
        }
    }
}

/// A strategy's output: partial fields plus the raw description text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExtraction {
    pub job: PartialJob,
    pub description: String,
}

impl RawExtraction {
    pub fn new(job: PartialJob, description: impl Into<String>) -> Self {
        Self {
            job,
            description: description.into(),
        }
    }
}

/// Outcome of one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The URL or page does not have the shape this strategy handles.
    NotApplicable,
    /// Applicable but the fetch, parse or acceptance check failed.
    Failed(String),
    Success(RawExtraction),
}

impl Attempt {
    pub fn failed(reason: impl Into<String>) -> Self {
        Attempt::Failed(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Attempt::Success(_))
    }
}

/// Dispatcher output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scraped {
    pub record: JobRecord,
    /// Name of the strategy that produced the record.
    pub strategy: String,
}

impl Scraped {
    /// Description body, handed to persistence separately from the record.
    pub fn body(&self) -> &str {
        &self.record.description
    }
}

/// A scraped record and the place a store put it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredJob {
    #[serde(flatten)]
    pub scraped: Scraped,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSet(pub BTreeMap<String, String>);
impl HeaderSet {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    pub fn with(mut self, k: &str, v: &str) -> Self {
        self.0.insert(k.to_string(), v.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
