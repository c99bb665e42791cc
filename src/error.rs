use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("cannot write output {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
}
impl MergeError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Output {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
}
