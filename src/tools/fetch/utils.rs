use crate::error::*;
use reqwest::StatusCode;

/// Reject non-2xx responses with a typed error.
pub(crate) fn validate_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ScrapeError::status(url, status))
    }
}

/// Short human label for a failed status, used in diagnostics.
pub(crate) fn describe_status(status: u16) -> &'static str {
    match status {
        400 => "bad request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not found",
        429 => "rate limited",
        500..=599 => "server error",
        _ => "unexpected status",
    }
}
