// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! nightowl: report SVN commit activity inside a daily time window
//!
//! Reads already-retrieved `svn log --verbose` output from a file or stdin,
//! decodes it into commit records, filters by time window and author
//! exclusions, and prints a rank or detail report.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use nightowl::config::{Config, Mode};
use nightowl::render;
use nightowl_svn::prelude::*;

fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so report output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let raw = read_log_text(&config)?;
    // svn log output ends with a delimiter plus a newline; trim so the
    // trailing empty line is not taken for a record
    let decoded = decode_log(raw.trim());
    if let Some(ref diagnostic) = decoded.diagnostic {
        warn!(
            %diagnostic,
            records = decoded.commits.len(),
            "log decoded partially; reporting over the decoded prefix"
        );
    }

    let commits = filter_commits(&decoded.commits, &config.filter_options());
    debug!(
        total = decoded.commits.len(),
        kept = commits.len(),
        "filtered commits"
    );

    let output = match config.mode {
        Mode::Rank => {
            let entries = rank_report(&commits);
            if config.json {
                serde_json::to_string_pretty(&entries)?
            } else {
                render::render_rank(&entries)
            }
        }
        Mode::Detail => {
            let author = config.author.as_deref().unwrap_or_default();
            let entries = detail_report(&commits, author)?;
            if config.json {
                serde_json::to_string_pretty(&entries)?
            } else {
                render::render_detail(author.trim(), &entries)
            }
        }
    };
    print!("{output}");

    Ok(())
}

/// Read the raw log blob from the configured file, or stdin as a fallback
fn read_log_text(config: &Config) -> Result<String> {
    match &config.log_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read log file {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read log text from stdin")?;
            Ok(raw)
        }
    }
}
