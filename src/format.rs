//! Text blocks that make up the context document.
//!
//! Everything here is a pure function of its arguments; the pipeline decides
//! when and where the blocks are written.

use crate::git::RepositoryInfo;
use crate::pipeline::RunStats;
use chrono::{DateTime, SecondsFormat, Utc};

pub const DEFAULT_OUTPUT: &str = "repo_context.txt";

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn format_header(info: &RepositoryInfo, version: &str, timestamp: &str) -> String {
    format!(
        "Repository Context Generated on {}\nRepository Root: {}\nCurrent Branch: {}\nGenerator Version: {}\n\n---\n",
        timestamp,
        info.root.display(),
        info.branch,
        version
    )
}

pub fn format_file_section(relative_path: &str, content: &str) -> String {
    format!(
        "\n=== File: {path} ===\n\n{content}\n\n=== End: {path} ===\n",
        path = relative_path,
        content = content
    )
}

pub fn format_summary(stats: &RunStats, version: &str, timestamp: &str) -> String {
    format!(
        "\n=== Summary ===\n\nFiles processed: {}\nFiles skipped: {} (binary, symlinks, or missing)\nGenerated on: {}\nGenerator Version: {}\n",
        stats.processed, stats.skipped, timestamp, version
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn info() -> RepositoryInfo {
        RepositoryInfo {
            root: PathBuf::from("/work/project"),
            branch: "main".to_string(),
        }
    }

    #[test]
    fn test_timestamp_is_iso() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(timestamp(at), "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn test_header_shape() {
        let header = format_header(&info(), "1.2.3", "2024-05-01T09:30:00.000Z");
        assert_eq!(
            header,
            "Repository Context Generated on 2024-05-01T09:30:00.000Z\n\
             Repository Root: /work/project\n\
             Current Branch: main\n\
             Generator Version: 1.2.3\n\
             \n\
             ---\n"
        );
    }

    #[test]
    fn test_header_empty_branch() {
        let detached = RepositoryInfo {
            branch: String::new(),
            ..info()
        };
        assert!(format_header(&detached, "1", "t").contains("Current Branch: \n"));
    }

    #[test]
    fn test_file_section_is_verbatim() {
        let content = "line one\n  === File: fake ===\n\ttabbed";
        let section = format_file_section("src/lib.rs", content);
        assert_eq!(
            section,
            "\n=== File: src/lib.rs ===\n\nline one\n  === File: fake ===\n\ttabbed\n\n=== End: src/lib.rs ===\n"
        );
    }

    #[test]
    fn test_summary_shape() {
        let stats = RunStats {
            processed: 3,
            skipped: 2,
            errored: 1,
        };
        let summary = format_summary(&stats, "0.1.0", "2024-05-01T09:30:00.000Z");
        assert_eq!(
            summary,
            "\n=== Summary ===\n\n\
             Files processed: 3\n\
             Files skipped: 2 (binary, symlinks, or missing)\n\
             Generated on: 2024-05-01T09:30:00.000Z\n\
             Generator Version: 0.1.0\n"
        );
        assert!(!summary.contains("errored"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let stats = RunStats::default();
        assert_eq!(
            format_header(&info(), "1", "t"),
            format_header(&info(), "1", "t")
        );
        assert_eq!(
            format_file_section("a", "b"),
            format_file_section("a", "b")
        );
        assert_eq!(
            format_summary(&stats, "1", "t"),
            format_summary(&stats, "1", "t")
        );
    }
}
