use std::path::PathBuf;

use crate::config;
use crate::credentials::CredentialsFile;
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub credentials: CredentialsFile,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(credentials_file: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let path = config::credentials_file(credentials_file.as_deref())?;
        tracing::debug!(path = %path.display(), "using credentials file");

        Ok(Self {
            credentials: CredentialsFile::new(path),
            output: Output::new(json),
        })
    }
}
