//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use std::path::Path;

impl Config {
    /// Serialize config to TOML string
    ///
    /// Runtime-only values (`ADOTA_DEMO`, `ADOTA_TOKEN`) are not written.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# adota configuration

# Base URL of the adoption API (ADOTA_API_URL overrides)
api_url = "{api_url}"

# Seconds before a listing request is abandoned
request_timeout_secs = {timeout}

# Session token file (ADOTA_TOKEN overrides; manage with `adota token`)
token_path = "{token_path}"

# Theme: dark, light
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = self.api_url,
            timeout = self.request_timeout_secs,
            token_path = toml_path(&self.token_path),
            theme = self.theme,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_path(&self.logging.file_dir),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to the default config path
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        self.save_to(&path)
    }

    /// Write the TOML form to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml())
    }
}

/// Paths go inside basic strings, so backslashes must be escaped
fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
