// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! nightowl-svn: SVN log processing for nightowl
//!
//! This library crate decodes `svn log --verbose` output into structured
//! commit records and provides the time-window filtering and reporting
//! transforms used by the nightowl CLI.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use nightowl_svn::{decode_log, filter_commits, rank_report, FilterOptions};
//!
//! let raw = std::fs::read_to_string("svn.log").unwrap_or_default();
//! let decoded = decode_log(raw.trim());
//! let window = "22:00~04:00".parse().expect("valid window");
//! let night = filter_commits(&decoded.commits, &FilterOptions::with_default_ignores(window));
//!
//! for entry in rank_report(&night) {
//!     println!("{}: {}", entry.author, entry.count);
//! }
//! ```

pub mod commit;
pub mod error;
pub mod filter;
pub mod parser;
pub mod report;
pub mod window;

pub use commit::SvnCommit;
pub use error::{DecodeError, ReportError};
pub use filter::{filter_commits, FilterOptions, DEFAULT_IGNORED_AUTHORS};
pub use parser::{decode_log, parse_date_field, DecodedLog, LogReader, RECORD_DELIMITER};
pub use report::{detail_report, rank_report, DetailEntry, RankEntry};
pub use window::{TimeWindow, TimeWindowParseError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::SvnCommit;
    pub use crate::error::{DecodeError, ReportError};
    pub use crate::filter::{filter_commits, FilterOptions};
    pub use crate::parser::{decode_log, DecodedLog};
    pub use crate::report::{detail_report, rank_report};
    pub use crate::window::TimeWindow;
}
