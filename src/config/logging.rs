//! `[logging]` section: console level and the optional JSON log file

use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

// ─────────────────────────────────────────────────────────────────────────────
// Rotation
// ─────────────────────────────────────────────────────────────────────────────

/// How often the log file starts over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for the lifetime of the install
    Never,
}

impl LogRotation {
    /// Case-insensitive; `None` for anything unrecognised
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    /// Matching policy for `tracing-appender`
    pub fn rotation(&self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error; applies to this crate only
    pub level: String,
    /// Write JSON records to `file_dir` as well
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem, e.g. "adota" -> "adota.2026-10-18"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: "adota".to_string(),
        }
    }
}

/// `[logging]` as written in config.toml; every key optional
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Overlay the keys present in the file; an unknown rotation keeps the default
    pub fn apply(&mut self, file: FileLogging) {
        if let Some(level) = file.level {
            self.level = level;
        }
        if let Some(enabled) = file.file_enabled {
            self.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir {
            self.file_dir = PathBuf::from(dir);
        }
        if let Some(rotation) = file.file_rotation.as_deref().and_then(LogRotation::parse) {
            self.file_rotation = rotation;
        }
        if let Some(prefix) = file.file_prefix {
            self.file_prefix = prefix;
        }
    }

    /// `EnvFilter` directive used when RUST_LOG is unset
    pub fn filter_directive(&self) -> String {
        format!("adota={}", self.level)
    }
}
