use crate::runner::CommandRunner;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GitError {
    ToolNotFound,
    RepositoryInfo(String),
    TrackedFiles(String),
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::ToolNotFound => write!(
                f,
                "git executable not found; ensure git is installed and on your PATH"
            ),
            GitError::RepositoryInfo(msg) => {
                write!(f, "failed to read repository info: {}", msg)
            }
            GitError::TrackedFiles(msg) => write!(f, "failed to list tracked files: {}", msg),
        }
    }
}

impl std::error::Error for GitError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub root: PathBuf,
    /// Empty when HEAD is detached.
    pub branch: String,
}

pub fn is_repository(runner: &dyn CommandRunner) -> bool {
    runner
        .invoke("git", &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out.success)
        .unwrap_or(false)
}

pub fn repo_info(runner: &dyn CommandRunner) -> Result<RepositoryInfo, GitError> {
    let root = query(runner, &["rev-parse", "--show-toplevel"])?;
    let branch = query(runner, &["branch", "--show-current"])?;

    Ok(RepositoryInfo {
        root: PathBuf::from(root),
        branch,
    })
}

fn query(runner: &dyn CommandRunner, args: &[&str]) -> Result<String, GitError> {
    let output = runner
        .invoke("git", args)
        .map_err(|e| GitError::RepositoryInfo(format!("git {}: {}", args.join(" "), e)))?;

    if !output.success {
        return Err(GitError::RepositoryInfo(format!(
            "git {}: {}",
            args.join(" "),
            output.stderr.trim()
        )));
    }

    Ok(output.stdout.trim().to_string())
}

pub fn ls_files(runner: &dyn CommandRunner) -> Result<Vec<String>, GitError> {
    let output = runner
        .invoke("git", &["ls-files", "-z", "--full-name"])
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GitError::ToolNotFound,
            _ => GitError::TrackedFiles(e.to_string()),
        })?;

    if !output.success {
        return Err(GitError::TrackedFiles(output.stderr.trim().to_string()));
    }

    // NUL-separated entries are never C-quoted, whatever characters the name holds.
    let files = output
        .stdout
        .split('\0')
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect();

    Ok(files)
}
