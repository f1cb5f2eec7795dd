//! SVN commit record types and operations

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One decoded revision from `svn log --verbose` output
///
/// Constructed once by the log reader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvnCommit {
    /// Author name, verbatim from the metadata line
    pub author: String,
    /// Commit timestamp with its UTC offset resolved
    pub timestamp: DateTime<FixedOffset>,
    /// Single-line log message (may be empty)
    pub message: String,
    /// Raw changed-path entry lines, in the order they appeared
    pub changed_paths: Vec<String>,
}

impl SvnCommit {
    /// Number of changed-path entries in this commit
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.changed_paths.len()
    }

    /// Check if this commit touched no recorded paths
    #[must_use]
    pub fn is_pathless(&self) -> bool {
        self.changed_paths.is_empty()
    }
}
