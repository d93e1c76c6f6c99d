use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FfindError {
    #[error("cannot open directory {path}: {source}")]
    DirAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl FfindError {
    pub(crate) fn dir_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FfindError::DirAccess {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FfindError::Metadata {
            path: path.into(),
            source,
        }
    }

    /// The path the error occurred at. Callers use this to present
    /// "skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> &PathBuf {
        match self {
            FfindError::DirAccess { path, .. } | FfindError::Metadata { path, .. } => path,
        }
    }
}
