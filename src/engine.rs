use crate::error::FfindError;
use crate::matcher::matches;
use crate::options::FfindOptions;
use crate::types::{EntryKind, FileReport};
use std::fs::{self, DirEntry, ReadDir};
use std::path::{Path, PathBuf};

/// One directory on the traversal stack.
///
/// `entries` stays `None` until the walk actually reaches the frame, so a
/// consumer that stops early never pays for listing directories it did not
/// reach.
struct Frame {
    dir: PathBuf,
    depth: usize,
    entries: Option<ReadDir>,
}

/// A lazy, depth-first search over a directory tree.
///
/// Yields one [`FileReport`] per entry that passes the kind filter and the
/// wildcard match, in directory-listing order (not sorted). A directory that
/// cannot be opened surfaces as an `Err` item and that branch is abandoned;
/// sibling branches continue. Dropping the stream halts all further listing.
///
/// Symlinked directories are resolved through their targets and descended
/// like any other directory; a symlink cycle is bounded only by
/// [`max_depth`](FfindOptions::max_depth).
///
/// # Example
/// ```no_run
/// use ffind::{FfindBuilder, FfindStream};
///
/// let options = FfindBuilder::new("*.txt").recursive(true).build();
/// let mut stream = FfindStream::new(".", options).expect("cannot open directory");
/// if let Some(Ok(first)) = stream.next() {
///     println!("first match: {}", first.path.display());
/// }
/// ```
pub struct FfindStream {
    options: FfindOptions,
    stack: Vec<Frame>,
}

impl FfindStream {
    /// Start a search rooted at `root`.
    ///
    /// The root directory is opened eagerly; if that fails the stream is
    /// never constructed and the error names the root.
    pub fn new(root: impl Into<PathBuf>, options: FfindOptions) -> Result<Self, FfindError> {
        let root = root.into();
        let entries = fs::read_dir(&root).map_err(|e| FfindError::dir_access(&root, e))?;
        Ok(Self {
            options,
            stack: vec![Frame {
                dir: root,
                depth: 0,
                entries: Some(entries),
            }],
        })
    }

    /// Handle one listing item from a frame at `depth`. Returns the report
    /// to emit, if the entry is eligible and matches.
    fn process_entry(&mut self, entry: DirEntry, depth: usize) -> Option<FileReport> {
        // `read_dir` already joins the parent path (no doubled separator)
        // and never yields the self/parent entries.
        let full_path = entry.path();
        let name = entry.file_name();

        let kind = resolve_kind(&entry, &full_path)?;

        let eligible = match kind {
            EntryKind::Directory => self.options.include_dirs,
            EntryKind::File => self.options.include_files,
            EntryKind::Unknown => false,
        };

        let mut report = None;
        if eligible
            && matches(
                &name.to_string_lossy(),
                &self.options.pattern,
                self.options.case_sensitive,
            )
        {
            report = build_report(full_path.clone());
        }

        // The bound is enforced before descending: a directory exactly at
        // the bound is still listed and matched above, but never entered.
        if kind == EntryKind::Directory && self.options.recursive && depth < self.options.max_depth
        {
            self.stack.push(Frame {
                dir: full_path,
                depth: depth + 1,
                entries: None,
            });
        }

        report
    }
}

impl Iterator for FfindStream {
    type Item = Result<FileReport, FfindError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let depth = frame.depth;

            if frame.entries.is_none() {
                match fs::read_dir(&frame.dir) {
                    Ok(listing) => frame.entries = Some(listing),
                    Err(e) => {
                        let dir = frame.dir.clone();
                        self.stack.pop();
                        return Some(Err(FfindError::dir_access(dir, e)));
                    }
                }
            }
            let Some(entries) = frame.entries.as_mut() else {
                continue;
            };

            let entry = match entries.next() {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Err(e)) => {
                    let dir = frame.dir.clone();
                    return Some(Err(FfindError::dir_access(dir, e)));
                }
                Some(Ok(entry)) => entry,
            };

            if let Some(report) = self.process_entry(entry, depth) {
                return Some(Ok(report));
            }
        }
    }
}

/// Classify a listing item, falling back to an explicit metadata query when
/// the listing reports the kind lazily (symlinks, platforms without kind
/// info). The fallback follows symlinks, like `stat`. Returns `None` when
/// the query fails (broken symlink, deleted mid-walk): the entry is skipped
/// and the traversal continues.
fn resolve_kind(entry: &DirEntry, full_path: &Path) -> Option<EntryKind> {
    match entry.file_type() {
        Ok(ft) if ft.is_dir() => return Some(EntryKind::Directory),
        Ok(ft) if ft.is_file() => return Some(EntryKind::File),
        _ => {}
    }
    match fs::metadata(full_path) {
        Ok(md) if md.is_dir() => Some(EntryKind::Directory),
        Ok(md) if md.is_file() => Some(EntryKind::File),
        // Sockets, pipes, devices: neither kind filter can select them.
        Ok(_) => Some(EntryKind::Unknown),
        Err(e) => {
            let _err = FfindError::metadata(full_path, e);
            #[cfg(feature = "logging")]
            tracing::debug!("skipping entry: {_err}");
            None
        }
    }
}

/// Query metadata for a matched entry. A failure here (e.g. the entry was
/// deleted between listing and stat) drops the report but never the walk.
fn build_report(path: PathBuf) -> Option<FileReport> {
    match fs::metadata(&path).and_then(|md| FileReport::from_metadata(path.clone(), &md)) {
        Ok(report) => Some(report),
        Err(e) => {
            let _err = FfindError::metadata(path, e);
            #[cfg(feature = "logging")]
            tracing::debug!("skipping entry: {_err}");
            None
        }
    }
}

/// Run a search to completion and collect the matches.
///
/// The blocking counterpart of [`FfindStream`]: directory-access failures
/// below the root abandon that branch (reported at warn level when the
/// `logging` feature is enabled) and the rest of the tree is still searched.
/// Only a failure to open the root itself is an `Err`.
///
/// # Example
/// ```no_run
/// use ffind::{FfindBuilder, ffind};
///
/// let options = FfindBuilder::new("*.rs")
///     .recursive(true)
///     .max_depth(5)
///     .build();
/// for report in ffind("src", options).expect("cannot open directory") {
///     println!("{}", report.path.display());
/// }
/// ```
pub fn ffind(
    root: impl Into<PathBuf>,
    options: FfindOptions,
) -> Result<Vec<FileReport>, FfindError> {
    let stream = FfindStream::new(root, options)?;
    let mut reports = Vec::new();
    for item in stream {
        match item {
            Ok(report) => reports.push(report),
            Err(_err) => {
                #[cfg(feature = "logging")]
                tracing::warn!("{_err}");
            }
        }
    }
    Ok(reports)
}
