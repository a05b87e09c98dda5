use crate::runner::CommandRunner;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryReason {
    /// `file` described the content as something other than text.
    Detected(String),
    /// `file` itself could not be run; treated as binary so nothing unreadable
    /// ends up in the document.
    DetectorFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Symlink,
    Missing,
    Binary(BinaryReason),
    Text,
}

/// Decide whether `path` can be embedded as text.
///
/// Errors are only returned for metadata failures other than "not found"
/// (permissions and the like).
pub fn classify(runner: &dyn CommandRunner, path: &Path) -> io::Result<Classification> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => return Ok(Classification::Symlink),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Classification::Missing),
        Err(e) => return Err(e),
    }

    let path_arg = path.to_string_lossy();
    let output = match runner.invoke("file", &["--brief", &path_arg]) {
        Ok(out) if out.success => out,
        Ok(out) => {
            return Ok(Classification::Binary(BinaryReason::DetectorFailed(
                format!("file exited with failure: {}", out.stderr.trim()),
            )))
        }
        Err(e) => {
            return Ok(Classification::Binary(BinaryReason::DetectorFailed(
                format!("could not run file: {}", e),
            )))
        }
    };

    let description = output.stdout.trim().to_string();
    if is_text_description(&description) {
        Ok(Classification::Text)
    } else {
        Ok(Classification::Binary(BinaryReason::Detected(description)))
    }
}

fn is_text_description(description: &str) -> bool {
    let lower = description.to_lowercase();
    lower.contains("text") || lower.contains("empty")
}
