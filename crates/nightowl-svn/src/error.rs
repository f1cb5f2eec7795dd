// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for nightowl-svn

use thiserror::Error;

/// Errors that can occur while decoding `svn log` output
///
/// All variants are caught at the [`decode_log`](crate::parser::decode_log)
/// boundary and surfaced as the decode diagnostic; they never propagate to
/// callers of the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A line that should be the record delimiter is something else
    #[error("expected record delimiter, got {line:?} ({got} chars, expected {expected})")]
    BadDelimiter {
        /// The offending line
        line: String,
        /// Length of the offending line
        got: usize,
        /// Length of the expected delimiter
        expected: usize,
    },

    /// The `rev | author | date | N lines` metadata line is malformed
    #[error("malformed metadata line: {line:?}")]
    MetadataFields {
        /// The offending line
        line: String,
    },

    /// The date field does not match `YYYY-MM-DD HH:MM:SS +ZZ:ZZ (...)`
    #[error("malformed date field: {field:?}")]
    BadTimestamp {
        /// The date field as it appeared in the metadata line
        field: String,
    },

    /// The literal `Changed paths:` marker is missing
    #[error("expected `Changed paths:` marker, got {line:?}")]
    MissingChangedPaths {
        /// The offending line
        line: String,
    },

    /// A changed-paths block ran into the next record delimiter before the
    /// terminating blank line
    #[error("changed-paths block not terminated before the next record delimiter")]
    UnterminatedPaths,

    /// The log ended in the middle of a record block
    #[error("log ended in the middle of a record")]
    Truncated,
}

/// Errors raised by the report builders
///
/// Unlike [`DecodeError`], these are usage errors and propagate directly to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The detail report requires a non-blank author name
    #[error("an author name is required for the detail report")]
    MissingAuthor,
}
