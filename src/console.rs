use crate::classify::BinaryReason;
use crate::pipeline::{FileOutcome, RunStats};
use colored::*;
use std::path::Path;

/// Disable ANSI styling for everything printed afterwards.
pub fn disable_colors() {
    colored::control::set_override(false);
}

pub fn outcome_line(path: &str, outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Processed => format!("{} {}", "✓".green(), path),
        FileOutcome::SkippedSymlink => skipped_line("symlink", path),
        FileOutcome::SkippedMissing => skipped_line("missing", path),
        FileOutcome::SkippedBinary(reason) => {
            let line = skipped_line("binary", path);
            match reason {
                BinaryReason::Detected(_) => line,
                BinaryReason::DetectorFailed(msg) => {
                    format!("{}\n  {}", line, msg.dimmed())
                }
            }
        }
        FileOutcome::Errored(msg) => {
            format!("{} Error processing {}: {}", "✗".red(), path, msg.red())
        }
    }
}

fn skipped_line(reason: &str, path: &str) -> String {
    format!("{} {}", format!("⚠ Skipped {}:", reason).yellow(), path)
}

pub fn report_outcome(path: &str, outcome: &FileOutcome) {
    println!("{}", outcome_line(path, outcome));
}

pub fn report_totals(stats: &RunStats, output: &Path) {
    println!();
    println!(
        "{} {}",
        "Context written to".bold(),
        output.display().to_string().bold()
    );
    println!("Files processed: {}", stats.processed.to_string().green());
    println!("Files skipped: {}", stats.skipped.to_string().yellow());
    if stats.errored > 0 {
        println!("Files with errors: {}", stats.errored.to_string().red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_lines_plain() {
        disable_colors();

        assert_eq!(outcome_line("a.txt", &FileOutcome::Processed), "✓ a.txt");
        assert_eq!(
            outcome_line("link", &FileOutcome::SkippedSymlink),
            "⚠ Skipped symlink: link"
        );
        assert_eq!(
            outcome_line("gone.rs", &FileOutcome::SkippedMissing),
            "⚠ Skipped missing: gone.rs"
        );
        assert_eq!(
            outcome_line(
                "img.png",
                &FileOutcome::SkippedBinary(BinaryReason::Detected("PNG".into()))
            ),
            "⚠ Skipped binary: img.png"
        );
        assert_eq!(
            outcome_line(
                "x",
                &FileOutcome::SkippedBinary(BinaryReason::DetectorFailed("no file".into()))
            ),
            "⚠ Skipped binary: x\n  no file"
        );
        assert_eq!(
            outcome_line("x", &FileOutcome::Errored("denied".into())),
            "✗ Error processing x: denied"
        );
    }
}
