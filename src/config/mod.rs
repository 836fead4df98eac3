//! Configuration for the adota client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/adota/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the adoption API
    pub api_url: String,

    /// Per-request timeout for listing fetches
    pub request_timeout_secs: u64,

    /// Where the session token is stored
    pub token_path: PathBuf,

    /// Color theme: "dark" or "light"
    pub theme: String,

    /// Demo mode: serve fixture animals instead of calling the API
    pub demo_mode: bool,

    /// Token from the environment; wins over the token file
    pub token_override: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            token_path: Self::default_token_path(),
            theme: DEFAULT_THEME.to_string(),
            demo_mode: false,
            token_override: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub token_path: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Config directory: ~/.config/adota
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("adota"))
    }

    /// Get the config file path: ~/.config/adota/config.toml
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    fn default_token_path() -> PathBuf {
        Self::config_dir()
            .map(|p| p.join("token"))
            .unwrap_or_else(|| PathBuf::from(".adota-token"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse the config file at `path`; a missing file yields defaults
    ///
    /// A file that exists but cannot be read or parsed is an error. A broken
    /// config should stop startup, not silently fall back to defaults.
    pub(crate) fn load_file_config(path: &Path) -> anyhow::Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let file: FileConfig = toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                if file.request_timeout_secs == Some(0) {
                    anyhow::bail!(
                        "Invalid {}: request_timeout_secs must be at least 1",
                        path.display()
                    );
                }
                Ok(file)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = env("ADOTA_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Timeout: env > file > default
        // Zero would time out every request, so it counts as unset
        let request_timeout_secs = env("ADOTA_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|&secs: &u64| secs > 0)
            .or(file.request_timeout_secs.filter(|&secs| secs > 0))
            .unwrap_or(defaults.request_timeout_secs);

        // Token path: file > default
        let token_path = file
            .token_path
            .map(PathBuf::from)
            .unwrap_or(defaults.token_path);

        // Theme: env > file > default
        let theme = env("ADOTA_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("ADOTA_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // Token override: env only, blank counts as unset
        let token_override = env("ADOTA_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        // Logging: file only (RUST_LOG is read when the subscriber starts)
        let mut logging = LoggingConfig::default();
        if let Some(section) = file.logging {
            logging.apply(section);
        }

        Self {
            api_url,
            request_timeout_secs,
            token_path,
            theme,
            demo_mode,
            token_override,
            logging,
        }
    }
}
