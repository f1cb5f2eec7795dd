// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the nightowl CLI
//!
//! This module provides the clap-derived command line surface: input
//! selection, the daily time window, report mode, and exclusion tuning.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nightowl_svn::{FilterOptions, TimeWindow};

/// nightowl - report SVN commit activity inside a daily time window
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nightowl")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to a file holding `svn log --verbose` output
    ///
    /// Reads the log text from stdin when omitted.
    #[arg(short = 'f', long, env = "NIGHTOWL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Daily time window as HH:MM~HH:MM (seconds optional)
    ///
    /// A start later than the end wraps past midnight, e.g. 22:00~04:00.
    #[arg(short, long, env = "NIGHTOWL_WINDOW", default_value = "00:00~23:59")]
    pub time: TimeWindow,

    /// Report mode
    #[arg(short, long, value_enum, default_value_t = Mode::Rank)]
    pub mode: Mode,

    /// Author to list in detail mode (required by --mode detail)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Additional author names to exclude from all reports
    #[arg(long = "ignore-author")]
    pub ignore_authors: Vec<String>,

    /// Do not exclude the built-in automated accounts
    #[arg(long, default_value = "false")]
    pub no_default_ignores: bool,

    /// Render reports as JSON instead of plain text
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so report output stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available report modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Per-author commit counts, least active first
    #[default]
    Rank,
    /// Chronological commit listing for one author
    Detail,
}

impl Config {
    /// Build the filter configuration from the window and exclusion flags
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        let options = if self.no_default_ignores {
            FilterOptions::new(self.time)
        } else {
            FilterOptions::with_default_ignores(self.time)
        };
        options.ignore_all(self.ignore_authors.iter().cloned())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
