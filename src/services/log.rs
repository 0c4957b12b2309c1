use crate::error::*;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Host of the scraped URL, when one was known.
    pub host: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

/// Append-only run log at `~/.jobscrape/activity.log`.
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> Result<Self> {
        let user_dirs = directories::UserDirs::new()
            .ok_or_else(|| ScrapeError::Config("could not determine home directory".into()))?;
        let dir = user_dirs.home_dir().join(".jobscrape");
        fs::create_dir_all(&dir)?;
        Ok(Self::with_path(dir.join("activity.log")))
    }

    pub fn with_path(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(
        &self,
        level: LogLevel,
        host: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            host: host.map(str::to_string),
            event: event.to_string(),
            details: details.map(str::to_string),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let level_str = match entry.level {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        };

        writeln!(
            file,
            "{} {} {} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            level_str,
            entry.event,
            entry.host.as_deref().unwrap_or("*"),
            entry.details.as_deref().unwrap_or("")
        )?;
        Ok(())
    }

    pub fn info(&self, host: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Info, host, event, details)
    }

    pub fn error(&self, host: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Error, host, event, details)
    }
}
