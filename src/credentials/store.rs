use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::AppResult;

use super::document::CredentialDocument;
use super::model::CloudCliEntry;

/// Credentials document persisted at a fixed path.
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<CredentialDocument> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "credentials file missing, starting empty");
            return Ok(CredentialDocument::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        CredentialDocument::parse(&raw)
    }

    /// Replaces the file atomically. The temp file is created `0600` next to
    /// the target and renamed over it.
    pub fn save(&self, document: &CredentialDocument) -> AppResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let payload = document.to_ini_string()?;
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(payload.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;

        tracing::debug!(path = %self.path.display(), "credentials file written");
        Ok(())
    }

    /// Loads, applies `entry` and writes back. Returns `true` when the
    /// profile section did not exist before.
    pub fn write_entry(&self, entry: &CloudCliEntry) -> AppResult<bool> {
        let mut document = self.load()?;
        let created = !document.has_profile(&entry.profile_name);
        document.save_entry(entry)?;
        self.save(&document)?;
        Ok(created)
    }
}
