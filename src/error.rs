use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("credential document error: {0}")]
    Document(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ini error: {0}")]
    Ini(#[from] ini::Error),
}

impl From<ini::ParseError> for AppError {
    fn from(err: ini::ParseError) -> Self {
        Self::Ini(ini::Error::Parse(err))
    }
}
