//! Rank and detail report builders
//!
//! Both reporters are pure transforms over an already-filtered commit
//! sequence; neither reorders or deduplicates its input beyond what it
//! documents.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::commit::SvnCommit;
use crate::error::ReportError;

/// One row of the rank report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Author name
    pub author: String,
    /// Number of commits by this author in the filtered sequence
    pub count: usize,
}

/// Count commits per author, least active first
///
/// Authors are grouped in first-appearance order and stable-sorted by
/// count, so ties keep the order in which the authors first appeared.
#[must_use]
pub fn rank_report(commits: &[SvnCommit]) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = Vec::new();
    for commit in commits {
        match entries.iter_mut().find(|e| e.author == commit.author) {
            Some(entry) => entry.count += 1,
            None => entries.push(RankEntry {
                author: commit.author.clone(),
                count: 1,
            }),
        }
    }
    entries.sort_by_key(|e| e.count);
    entries
}

/// One row of the detail report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    /// Commit timestamp
    pub timestamp: DateTime<FixedOffset>,
    /// Commit message, verbatim
    pub message: String,
    /// All changed-path entries joined back to back, with no separator
    pub paths: String,
}

/// List every commit by one author, in filtered-sequence order
///
/// The author name is trimmed before matching. The `paths` field of each
/// entry concatenates the changed-path lines directly, without inserting a
/// separator.
///
/// # Errors
///
/// Returns [`ReportError::MissingAuthor`] if `author` is empty or blank.
pub fn detail_report(commits: &[SvnCommit], author: &str) -> Result<Vec<DetailEntry>, ReportError> {
    let author = author.trim();
    if author.is_empty() {
        return Err(ReportError::MissingAuthor);
    }
    Ok(commits
        .iter()
        .filter(|commit| commit.author == author)
        .map(|commit| DetailEntry {
            timestamp: commit.timestamp,
            message: commit.message.clone(),
            paths: commit.changed_paths.concat(),
        })
        .collect())
}
