// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit filtering by author exclusion and time window

use std::collections::HashSet;

use crate::commit::SvnCommit;
use crate::window::TimeWindow;

/// Authors excluded by default: automated accounts whose commits are noise
pub const DEFAULT_IGNORED_AUTHORS: &[&str] = &["mlsvn_builder"];

/// Configuration for selecting the commits relevant to a report
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// The daily window a commit's timestamp must fall in
    pub window: TimeWindow,
    /// Authors excluded unconditionally, regardless of timestamp
    pub ignore_authors: HashSet<String>,
}

impl FilterOptions {
    /// Filter by window only, with no excluded authors
    #[must_use]
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            ignore_authors: HashSet::new(),
        }
    }

    /// Filter by window with [`DEFAULT_IGNORED_AUTHORS`] excluded
    #[must_use]
    pub fn with_default_ignores(window: TimeWindow) -> Self {
        Self::new(window).ignore_all(DEFAULT_IGNORED_AUTHORS.iter().copied())
    }

    /// Exclude a single author
    #[must_use]
    pub fn ignore_author(mut self, author: impl Into<String>) -> Self {
        self.ignore_authors.insert(author.into());
        self
    }

    /// Exclude several authors
    #[must_use]
    pub fn ignore_all<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_authors
            .extend(authors.into_iter().map(Into::into));
        self
    }
}

/// Select the order-preserving subsequence of commits relevant to a report
///
/// A commit survives when its author is not excluded and its timestamp
/// falls inside the window. No deduplication is performed.
#[must_use]
pub fn filter_commits(commits: &[SvnCommit], options: &FilterOptions) -> Vec<SvnCommit> {
    commits
        .iter()
        .filter(|commit| {
            !options.ignore_authors.contains(commit.author.as_str())
                && options.window.contains(&commit.timestamp)
        })
        .cloned()
        .collect()
}
