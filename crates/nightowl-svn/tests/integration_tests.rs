// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for nightowl-svn
//!
//! These tests drive the whole pipeline over synthetic `svn log --verbose`
//! blobs: decode, filter, report.

use nightowl_svn::prelude::*;
use nightowl_svn::RECORD_DELIMITER;

/// Build one well-formed record block (without the trailing delimiter)
fn record_block(revision: u32, author: &str, date: &str, paths: &[&str], message: &str) -> String {
    let mut block = format!(
        "{RECORD_DELIMITER}\nr{revision} | {author} | {date} | 1 line\nChanged paths:\n"
    );
    for path in paths {
        block.push_str("   ");
        block.push_str(path);
        block.push('\n');
    }
    block.push('\n');
    block.push_str(message);
    block.push('\n');
    block
}

/// Assemble record blocks into a full blob, with the trailing delimiter
/// `svn log` always emits
fn blob(blocks: &[String]) -> String {
    let mut raw = blocks.concat();
    raw.push_str(RECORD_DELIMITER);
    raw
}

fn night_blob() -> String {
    blob(&[
        record_block(
            4821,
            "zhangwei",
            "2024-03-11 23:40:12 +0800 (Mon, 11 Mar 2024)",
            &["M /trunk/src/save.cs", "A /trunk/src/save_v2.cs"],
            "fix crash when loading corrupted save files",
        ),
        record_block(
            4820,
            "mlsvn_builder",
            "2024-03-11 23:05:00 +0800 (Mon, 11 Mar 2024)",
            &["M /trunk/build/version.txt"],
            "automated version bump",
        ),
        record_block(
            4819,
            "lihua",
            "2024-03-11 12:10:45 +0800 (Mon, 11 Mar 2024)",
            &["M /trunk/docs/readme.md"],
            "update docs",
        ),
        record_block(
            4818,
            "zhangwei",
            "2024-03-11 01:22:03 +0800 (Mon, 11 Mar 2024)",
            &["D /trunk/src/old_save.cs"],
            "remove dead save path",
        ),
    ])
}

#[test]
fn test_round_trip_structural_validity() {
    let k: u32 = 5;
    let n: u32 = 3;
    let blocks: Vec<String> = (0..k)
        .map(|i| {
            let paths: Vec<String> = (0..n)
                .map(|j| format!("M /trunk/mod_{i}/file_{j}.cs"))
                .collect();
            let path_refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            record_block(
                5000 - i,
                &format!("author_{i}"),
                "2024-03-11 23:40:12 +0800 (Mon, 11 Mar 2024)",
                &path_refs,
                &format!("change number {i}"),
            )
        })
        .collect();

    let decoded = decode_log(&blob(&blocks));
    assert!(decoded.is_complete(), "diagnostic: {:?}", decoded.diagnostic);
    assert_eq!(decoded.commits.len(), k as usize);
    for (i, commit) in decoded.commits.iter().enumerate() {
        assert_eq!(commit.author, format!("author_{i}"));
        assert_eq!(commit.path_count(), n as usize);
        assert_eq!(commit.message, format!("change number {i}"));
    }
}

#[test]
fn test_truncate_on_error_keeps_decoded_prefix() {
    let mut blocks = vec![
        record_block(
            3,
            "a",
            "2024-03-11 23:00:00 +0800 (Mon, 11 Mar 2024)",
            &["M /trunk/x.cs"],
            "three",
        ),
        record_block(
            2,
            "b",
            "2024-03-11 22:30:00 +0800 (Mon, 11 Mar 2024)",
            &["M /trunk/y.cs"],
            "two",
        ),
        record_block(
            1,
            "c",
            "2024-03-11 22:00:00 +0800 (Mon, 11 Mar 2024)",
            &["M /trunk/z.cs"],
            "one",
        ),
    ];
    // Corrupted fourth record: the Changed paths: marker is missing
    blocks.push(format!(
        "{RECORD_DELIMITER}\nr0 | d | 2024-03-11 21:00:00 +0800 (Mon, 11 Mar 2024) | 1 line\nno marker here\n"
    ));

    let decoded = decode_log(&blob(&blocks));
    assert_eq!(decoded.commits.len(), 3);
    assert!(!decoded.is_complete());
    assert!(matches!(
        decoded.diagnostic,
        Some(DecodeError::MissingChangedPaths { .. })
    ));

    // Reporting proceeds normally over the partial sequence
    let ranked = rank_report(&decoded.commits);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_pipeline_rank_over_night_window() {
    let decoded = decode_log(&night_blob());
    assert!(decoded.is_complete());
    assert_eq!(decoded.commits.len(), 4);

    let window: TimeWindow = "22:00~04:00".parse().expect("window should parse");
    let night = filter_commits(&decoded.commits, &FilterOptions::with_default_ignores(window));

    // The builder account and the midday commit are both gone
    assert_eq!(night.len(), 2);
    assert!(night.iter().all(|c| c.author == "zhangwei"));

    let ranked = rank_report(&night);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].author, "zhangwei");
    assert_eq!(ranked[0].count, 2);
}

#[test]
fn test_pipeline_detail_concatenates_paths() {
    let decoded = decode_log(&night_blob());
    let window: TimeWindow = "22:00~04:00".parse().expect("window should parse");
    let night = filter_commits(&decoded.commits, &FilterOptions::with_default_ignores(window));

    let entries = detail_report(&night, "zhangwei").expect("author is valid");
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0].paths,
        "M /trunk/src/save.csA /trunk/src/save_v2.cs"
    );
    assert_eq!(entries[1].paths, "D /trunk/src/old_save.cs");
}

#[test]
fn test_detail_blank_author_rejected_after_decode() {
    let decoded = decode_log(&night_blob());
    assert!(matches!(
        detail_report(&decoded.commits, ""),
        Err(ReportError::MissingAuthor)
    ));
    assert!(matches!(
        detail_report(&decoded.commits, "   "),
        Err(ReportError::MissingAuthor)
    ));
}

#[test]
fn test_source_order_is_preserved_end_to_end() {
    let decoded = decode_log(&night_blob());
    let messages: Vec<&str> = decoded.commits.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "fix crash when loading corrupted save files",
            "automated version bump",
            "update docs",
            "remove dead save path",
        ]
    );
}

#[test]
fn test_trimmed_real_world_blob_decodes_completely() {
    // svn log output ends with the delimiter plus a final newline; callers
    // trim the blob before decoding, and the result must be complete
    let mut raw = blob(&[record_block(
        4821,
        "zhangwei",
        "2024-03-11 23:40:12 +0800 (Mon, 11 Mar 2024)",
        &["M /trunk/src/save.cs"],
        "fix crash when loading corrupted save files",
    )]);
    raw.push('\n');

    let decoded = decode_log(raw.trim());
    assert!(decoded.is_complete(), "diagnostic: {:?}", decoded.diagnostic);
    assert_eq!(decoded.commits.len(), 1);
    assert_eq!(decoded.commits[0].author, "zhangwei");
}

#[test]
fn test_blob_without_trailing_delimiter_still_decodes() {
    let blocks = [record_block(
        1,
        "a",
        "2024-03-11 23:00:00 +0800 (Mon, 11 Mar 2024)",
        &["M /trunk/x.cs"],
        "only record",
    )];
    // No trailing delimiter; the reader hits end of input cleanly
    let decoded = decode_log(blocks[0].trim_end_matches('\n'));
    assert!(decoded.is_complete(), "diagnostic: {:?}", decoded.diagnostic);
    assert_eq!(decoded.commits.len(), 1);
}
