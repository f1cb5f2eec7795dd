//! Plain-text rendering of report rows

use std::fmt::Write;

use nightowl_svn::{DetailEntry, RankEntry};

/// Render the rank report: one `author: count` row per line
#[must_use]
pub fn render_rank(entries: &[RankEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}: {}", entry.author, entry.count);
    }
    out
}

/// Render the detail report for one author
///
/// Each record becomes a header line naming the author, a line with the
/// timestamp and message, then the concatenated path string.
#[must_use]
pub fn render_detail(author: &str, entries: &[DetailEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{author}:");
        let _ = writeln!(out, "{} {}", entry.timestamp, entry.message);
        let _ = writeln!(out, "{}", entry.paths);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use similar_asserts::assert_eq;

    #[test]
    fn test_render_rank_rows() {
        let entries = vec![
            RankEntry {
                author: "lihua".to_string(),
                count: 1,
            },
            RankEntry {
                author: "zhangwei".to_string(),
                count: 3,
            },
        ];
        assert_eq!(render_rank(&entries), "lihua: 1\nzhangwei: 3\n");
    }

    #[test]
    fn test_render_rank_empty() {
        assert_eq!(render_rank(&[]), "");
    }

    #[test]
    fn test_render_detail_rows() {
        let entries = vec![DetailEntry {
            timestamp: FixedOffset::east_opt(8 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 3, 11, 23, 40, 12)
                .unwrap(),
            message: "fix crash".to_string(),
            paths: "M /trunk/a.csM /trunk/b.cs".to_string(),
        }];
        let rendered = render_detail("zhangwei", &entries);
        assert_eq!(
            rendered,
            "zhangwei:\n2024-03-11 23:40:12 +08:00 fix crash\nM /trunk/a.csM /trunk/b.cs\n"
        );
    }
}
