use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjctxError {
    #[error("Root not found: {0}")]
    NotFound(PathBuf),
    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Output exceeds limit of {limit} characters. Length is {actual}")]
    LimitExceeded { limit: usize, actual: usize },
    #[error("Invalid configuration: {0}")]
    Config(String),
}
impl ProjctxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjctxError::Io {
            path: path.into(),
            source,
        }
    }
}
