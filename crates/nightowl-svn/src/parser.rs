// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! SVN log decoding
//!
//! This module turns the raw text emitted by `svn log --verbose` into a
//! sequence of [`SvnCommit`] records. Decoding is best-effort-prefix: the
//! first structurally corrupt record stops the whole decode, and everything
//! decoded before it is returned together with the truncating error.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::commit::SvnCommit;
use crate::error::DecodeError;

/// Separator line emitted by `svn log` between entries (72 dashes)
pub const RECORD_DELIMITER: &str =
    "------------------------------------------------------------------------";

/// Literal marker introducing the changed-paths block
const CHANGED_PATHS_MARKER: &str = "Changed paths:";

/// Defensive cap on changed-path lines collected per record; once the count
/// exceeds this, collection stops without aborting the decode
const MAX_CHANGED_PATHS: usize = 9999;

/// Timestamp layout inside the metadata line's date field
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Result of decoding a full log blob
#[derive(Debug, Clone, Default)]
pub struct DecodedLog {
    /// Successfully decoded records, in source order
    pub commits: Vec<SvnCommit>,
    /// The error that truncated decoding, if any
    pub diagnostic: Option<DecodeError>,
}

impl DecodedLog {
    /// Check whether the whole blob decoded without a truncating error
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Parse the date field of a metadata line into an absolute timestamp
///
/// The field looks like `2024-03-11 23:40:12 +08:00 (Mon, 11 Mar 2024)`:
/// everything before the parenthetical day-of-week text, minus the
/// separating whitespace, is parsed against [`DATE_FORMAT`]. chrono accepts
/// the offset with or without the colon.
///
/// # Errors
///
/// Returns [`DecodeError::BadTimestamp`] if the `(` marker is absent or the
/// timestamp does not match the expected pattern.
pub fn parse_date_field(field: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    let bad = || DecodeError::BadTimestamp {
        field: field.to_string(),
    };
    let marker = field.find('(').ok_or_else(bad)?;
    let stamp = field[..marker].trim_end();
    DateTime::parse_from_str(stamp, DATE_FORMAT).map_err(|_| bad())
}

/// Cursor-driven reader producing one [`SvnCommit`] per call
///
/// Each read attempt returns a tagged result: `Ok(None)` when the input is
/// exhausted, `Ok(Some(commit))` for a decoded record, and `Err` when the
/// block at the cursor is structurally corrupt.
#[derive(Debug)]
pub struct LogReader<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LogReader<'a> {
    /// Create a reader over a raw log blob
    ///
    /// Splits on line feeds and strips stray carriage-return/line-feed
    /// remnants from each line, so CRLF and LF logs decode identically.
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        let lines = raw
            .split('\n')
            .map(|line| line.trim_matches(|c| c == '\r' || c == '\n'))
            .collect();
        Self { lines, pos: 0 }
    }

    /// Current cursor position, in lines
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consume and return the line at the cursor
    fn next_line(&mut self) -> Result<&'a str, DecodeError> {
        let line = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::Truncated)?;
        self.pos += 1;
        Ok(line)
    }

    /// Decode the record block at the cursor
    ///
    /// A record occupies a fixed block shape: the delimiter line, the
    /// `rev | author | date | N lines` metadata line, the `Changed paths:`
    /// marker, path lines up to a blank terminator, then exactly one
    /// message line.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when a line does not match its expected
    /// structural role, when the date field is malformed, or when the input
    /// ends mid-record.
    pub fn next_record(&mut self) -> Result<Option<SvnCommit>, DecodeError> {
        let Some(&delimiter) = self.lines.get(self.pos) else {
            return Ok(None);
        };
        if delimiter != RECORD_DELIMITER {
            return Err(DecodeError::BadDelimiter {
                line: delimiter.to_string(),
                got: delimiter.chars().count(),
                expected: RECORD_DELIMITER.len(),
            });
        }
        self.pos += 1;

        // svn log output ends with a trailing delimiter line
        if self.pos >= self.lines.len() {
            return Ok(None);
        }

        let metadata = self.next_line()?;
        let fields: Vec<&str> = metadata.split('|').map(str::trim).collect();
        if fields.len() < 3 || fields[1].is_empty() {
            return Err(DecodeError::MetadataFields {
                line: metadata.to_string(),
            });
        }
        let author = fields[1].to_string();
        let timestamp = parse_date_field(fields[2])?;

        let marker = self.next_line()?;
        if marker != CHANGED_PATHS_MARKER {
            return Err(DecodeError::MissingChangedPaths {
                line: marker.to_string(),
            });
        }

        let mut changed_paths = Vec::new();
        loop {
            let path_line = self.next_line()?.trim();
            if path_line.is_empty() {
                // Blank terminator, consumed but not stored
                break;
            }
            if path_line == RECORD_DELIMITER {
                return Err(DecodeError::UnterminatedPaths);
            }
            changed_paths.push(path_line.to_string());
            if changed_paths.len() > MAX_CHANGED_PATHS {
                break;
            }
        }

        let message = self.next_line()?.to_string();

        Ok(Some(SvnCommit {
            author,
            timestamp,
            message,
            changed_paths,
        }))
    }
}

/// Decode a full `svn log --verbose` blob into commit records
///
/// Records come back in source order (newest first, as `svn log` emits
/// them). On the first malformed record, the error is logged and recorded
/// as the diagnostic and decoding stops; the commits decoded before the
/// failure are still returned.
#[must_use]
pub fn decode_log(raw: &str) -> DecodedLog {
    let mut reader = LogReader::new(raw);
    let mut commits = Vec::new();
    let diagnostic = loop {
        match reader.next_record() {
            Ok(Some(commit)) => commits.push(commit),
            Ok(None) => break None,
            Err(err) => {
                warn!(line = reader.position(), %err, "svn log decode stopped early");
                break Some(err);
            }
        }
    };
    debug!(records = commits.len(), "decoded svn log");
    DecodedLog {
        commits,
        diagnostic,
    }
}
