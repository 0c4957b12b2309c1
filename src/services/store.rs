use crate::error::*;
use crate::types::JobRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

static SLUG_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static SLUG_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

const MAX_TITLE_SLUG_CHARS: usize = 50;
const MAX_COLLISION_SUFFIX: u32 = 99;

/// Where finished records go. The pipeline never depends on the format.
pub trait JobStore {
    /// Persist one record with its description body; returns where it landed.
    fn persist(&self, record: &JobRecord, body: &str) -> Result<PathBuf>;
}

/// Writes one Markdown file per record: a quoted `key: "value"` frontmatter
/// block followed by the description.
pub struct MarkdownStore {
    root: PathBuf,
}

impl MarkdownStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<org-slug>-<title-slug>`, without extension.
    pub fn file_stem(record: &JobRecord) -> String {
        let title: String = slugify(&record.title)
            .chars()
            .take(MAX_TITLE_SLUG_CHARS)
            .collect();
        let title = match title.trim_end_matches('-') {
            "" => "job",
            t => t,
        };
        format!("{}-{}", slugify(&record.organization_name), title)
    }
}

impl JobStore for MarkdownStore {
    fn persist(&self, record: &JobRecord, body: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let stem = Self::file_stem(record);
        let document = render_document(record, body);

        let candidates = std::iter::once(stem.clone())
            .chain((1..=MAX_COLLISION_SUFFIX).map(|i| format!("{stem}-{i}")));
        for name in candidates {
            let path = self.root.join(format!("{name}.md"));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(document.as_bytes())?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(ScrapeError::Io(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name for {stem} in {}", self.root.display()),
        )))
    }
}

/// Lowercase, drop punctuation, collapse whitespace and hyphens into single
/// hyphens. Empty results become `job`.
///
/// # Examples
/// ```
/// use jobscrape::services::store::slugify;
///
/// assert_eq!(slugify("  Senior Engineer (Rust) - Remote "), "senior-engineer-rust-remote");
/// assert_eq!(slugify("!!!"), "job");
/// ```
pub fn slugify(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    let stripped = SLUG_STRIP.replace_all(&lower, "");
    let slug = SLUG_SEPARATORS.replace_all(&stripped, "-");
    match slug.trim_matches('-') {
        "" => "job".to_string(),
        s => s.to_string(),
    }
}

fn frontmatter_value(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', " ");
    format!("\"{escaped}\"")
}

fn render_document(record: &JobRecord, body: &str) -> String {
    let views = record.views_count.to_string();
    let created = record.created_at_iso();
    let fields: [(&str, &str); 13] = [
        ("title", &record.title),
        ("organization_name", &record.organization_name),
        ("organization_logo", &record.organization_logo),
        ("location", &record.location),
        ("job_type", &record.job_type),
        ("salary_range", &record.salary_range),
        ("expires_at", &record.expires_at),
        ("application_email", &record.application_email),
        ("application_url", &record.application_url),
        ("application_instructions", &record.application_instructions),
        ("requirements", &record.requirements),
        ("created_at", &created),
        ("views_count", &views),
    ];

    let mut lines = vec!["---".to_string()];
    lines.extend(
        fields
            .iter()
            .map(|(key, value)| format!("{key}: {}", frontmatter_value(value))),
    );
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(body.to_string());
    lines.join("\n")
}
