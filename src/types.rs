use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::PathBuf;

/// One matched filesystem entry with its essential metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// The full path to the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Size of the entry in bytes, as reported by the filesystem.
    pub size_bytes: u64,
    /// Last modification time, in local time.
    pub modified: DateTime<Local>,
}

impl FileReport {
    pub(crate) fn from_metadata(path: PathBuf, metadata: &Metadata) -> std::io::Result<Self> {
        Ok(Self {
            path,
            is_directory: metadata.is_dir(),
            size_bytes: metadata.len(),
            modified: DateTime::from(metadata.modified()?),
        })
    }
}

/// Classification of a directory listing item.
///
/// `Unknown` means the listing reported the kind lazily (e.g. a symlink, or
/// a platform without kind info in the listing itself); it must be resolved
/// through an explicit metadata query before any kind-dependent logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Unknown,
}
