//! `[logging]` section: filter level and optional JSON log files

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_LOG_DIR: &str = "./logs";
const DEFAULT_PREFIX: &str = "tangle-dash";

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    const ALL: [Self; 3] = [Self::Hourly, Self::Daily, Self::Never];

    /// Unknown names roll daily
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|rotation| rotation.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    fn rotation(self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter for the crate's own events: trace, debug, info, warn, error
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// "tangle-dash" rolls into "tangle-dash.2026-01-15"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::resolve(None, &|_: &str| None)
    }
}

/// `[logging]` as written in the file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// `TANGLE_DASH_LOG_LEVEL` beats the file's level; the file settings
    /// have no env counterpart
    pub(crate) fn resolve(file: Option<FileLogging>, env: &impl Fn(&str) -> Option<String>) -> Self {
        let FileLogging {
            level,
            file_enabled,
            file_dir,
            file_rotation,
            file_prefix,
        } = file.unwrap_or_default();

        Self {
            level: env("TANGLE_DASH_LOG_LEVEL")
                .or(level)
                .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            file_enabled: file_enabled.unwrap_or(false),
            file_dir: file_dir.map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from),
            file_rotation: file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or_default(),
            file_prefix: file_prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        }
    }

    /// Rolling appender for the JSON log, `None` when file logging is off
    pub fn appender(&self) -> Result<Option<RollingFileAppender>> {
        if !self.file_enabled {
            return Ok(None);
        }

        std::fs::create_dir_all(&self.file_dir)
            .with_context(|| format!("Could not create log directory {}", self.file_dir.display()))?;

        RollingFileAppender::builder()
            .rotation(self.file_rotation.rotation())
            .filename_prefix(&self.file_prefix)
            .build(&self.file_dir)
            .map(Some)
            .context("Could not open log file")
    }
}
