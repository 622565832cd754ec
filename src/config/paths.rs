use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

const AWS_DIR: &str = ".aws";
const CREDENTIALS_FILE: &str = "credentials";

/// Resolves the credentials file: explicit path, then
/// `AWS_SHARED_CREDENTIALS_FILE`, then `~/.aws/credentials`.
pub fn credentials_file(explicit: Option<&Path>) -> AppResult<PathBuf> {
    let from_env = env::var_os(CREDENTIALS_FILE_ENV).map(PathBuf::from);
    resolve(explicit, from_env, dirs::home_dir())
}

fn resolve(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    home: Option<PathBuf>,
) -> AppResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = from_env.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(path);
    }

    let home = home
        .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
    Ok(home.join(AWS_DIR).join(CREDENTIALS_FILE))
}
