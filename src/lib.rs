//! # ffind
//!
//! `ffind` is a library for recursively searching a directory tree for
//! entries whose names match a shell-style wildcard pattern (`*` and `?`),
//! with case-insensitive matching, a recursion depth bound, and filtering by
//! entry kind (files, directories, or both).
//!
//! It provides both a simple blocking API ([`ffind`]) and a pull-based
//! streaming API ([`FfindStream`]) that lists directories lazily, so a
//! caller can stop after the first match without paying for the full
//! traversal.
//!
//! # Features
//!
//! - `logging`: Enables diagnostic logging of skipped entries and abandoned
//!   branches via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use ffind::{FfindBuilder, ffind};
//!
//! let options = FfindBuilder::new("*.txt")
//!     .recursive(true)
//!     .case_sensitive(false)
//!     .max_depth(10)
//!     .build();
//!
//! let reports = ffind(".", options).expect("failed to open directory");
//!
//! for report in reports {
//!     println!(
//!         "{} ({} bytes, dir: {})",
//!         report.path.display(),
//!         report.size_bytes,
//!         report.is_directory
//!     );
//! }
//! ```

mod engine;
mod error;
mod matcher;
mod options;
mod types;

pub mod output;

pub use engine::{FfindStream, ffind};
pub use error::FfindError;
pub use matcher::matches;
pub use options::{FfindBuilder, FfindOptions};
pub use types::{EntryKind, FileReport};
