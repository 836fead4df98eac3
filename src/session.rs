//! Session token access
//!
//! The token is issued elsewhere (the web login) and stored client-side.
//! The listing only ever reads it; `adota token set` writes it for users who
//! copy it from the browser.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Read access to a previously issued session token
pub trait TokenSource: Send + Sync {
    /// The current token, `None` when the user has no session
    fn token(&self) -> Option<String>;
}

/// Token kept in a plain file (the terminal counterpart of the `token` cookie)
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, token.trim())
            .with_context(|| format!("Failed to write token to {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the stored token; a missing file is not an error
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove token at {}", self.path.display())),
        }
    }
}

impl TokenSource for FileTokenStore {
    fn token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Could not read session token {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Fixed token, used for the `ADOTA_TOKEN` override
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        (!self.0.is_empty()).then(|| self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_save_read_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        store.save("  abc.def.ghi\n").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_file_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(FileTokenStore::new(path).token(), None);
    }

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken(String::new()).token(), None);
        assert_eq!(StaticToken("t".into()).token().as_deref(), Some("t"));
    }
}
