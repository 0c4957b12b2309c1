use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("missing host in url: {0}")]
    MissingHost(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status {status} ({reason}) from {url}")]
    Status {
        url: String,
        status: u16,
        reason: &'static str,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    /// Every strategy declined or failed, including the rendering fallback.
    #[error("all extraction strategies exhausted for {url}")]
    Exhausted { url: String },
}

impl ScrapeError {
    pub fn status(url: &str, status: reqwest::StatusCode) -> Self {
        ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: crate::tools::fetch::describe_status(status.as_u16()),
        }
    }

    /// True for the dispatcher's terminal failure.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScrapeError::Exhausted { .. })
    }
}
