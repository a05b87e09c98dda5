use crate::classify::{classify, BinaryReason, Classification};
use crate::console;
use crate::format::{self, format_file_section, format_header, format_summary};
use crate::git::{self, GitError, RepositoryInfo};
use crate::runner::CommandRunner;
use chrono::Utc;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Processed,
    SkippedSymlink,
    SkippedBinary(BinaryReason),
    SkippedMissing,
    Errored(String),
}

/// Counters for one run. `errored` is only shown on the console; the document
/// summary reports `processed` and `skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunStats {
    pub fn record(mut self, outcome: &FileOutcome) -> Self {
        match outcome {
            FileOutcome::Processed => self.processed += 1,
            FileOutcome::SkippedSymlink
            | FileOutcome::SkippedBinary(_)
            | FileOutcome::SkippedMissing => self.skipped += 1,
            FileOutcome::Errored(_) => self.errored += 1,
        }
        self
    }
}

#[derive(Debug)]
pub enum PipelineError {
    NotARepository,
    Git(GitError),
    Output { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::NotARepository => write!(f, "not a git repository"),
            PipelineError::Git(e) => write!(f, "{}", e),
            PipelineError::Output { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::NotARepository => None,
            PipelineError::Git(e) => Some(e),
            PipelineError::Output { source, .. } => Some(source),
        }
    }
}

impl From<GitError> for PipelineError {
    fn from(e: GitError) -> Self {
        PipelineError::Git(e)
    }
}

/// Confirm the working directory is inside a repository and fetch its info.
/// Nothing is written before this succeeds.
pub fn inspect(runner: &dyn CommandRunner) -> Result<RepositoryInfo, PipelineError> {
    if !git::is_repository(runner) {
        return Err(PipelineError::NotARepository);
    }
    Ok(git::repo_info(runner)?)
}

pub struct ContextPipeline<'a> {
    runner: &'a dyn CommandRunner,
    output: PathBuf,
    version: String,
    timestamp: Option<String>,
}

impl<'a> ContextPipeline<'a> {
    pub fn new(runner: &'a dyn CommandRunner, output: impl Into<PathBuf>) -> Self {
        ContextPipeline {
            runner,
            output: output.into(),
            version: VERSION.to_string(),
            timestamp: None,
        }
    }

    /// Pin the generation time instead of reading the clock.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn run(&self) -> Result<RunStats, PipelineError> {
        let info = inspect(self.runner)?;
        self.generate(&info)
    }

    /// Write the document for a repository already checked by [`inspect`].
    pub fn generate(&self, info: &RepositoryInfo) -> Result<RunStats, PipelineError> {
        let generated_at = self
            .timestamp
            .clone()
            .unwrap_or_else(|| format::timestamp(Utc::now()));

        let mut sink = File::create(&self.output).map_err(|e| self.output_error(e))?;
        sink.write_all(format_header(info, &self.version, &generated_at).as_bytes())
            .map_err(|e| self.output_error(e))?;

        // The header-only file stays behind if this fails.
        let files = git::ls_files(self.runner)?;

        let stats = files.iter().fold(RunStats::default(), |stats, relative| {
            let outcome = self.process_file(&mut sink, &info.root, relative);
            console::report_outcome(relative, &outcome);
            stats.record(&outcome)
        });

        sink.write_all(format_summary(&stats, &self.version, &generated_at).as_bytes())
            .map_err(|e| self.output_error(e))?;

        Ok(stats)
    }

    fn process_file(&self, sink: &mut File, root: &Path, relative: &str) -> FileOutcome {
        let path = root.join(relative);

        let classification = match classify(self.runner, &path) {
            Ok(c) => c,
            Err(e) => return FileOutcome::Errored(e.to_string()),
        };

        match classification {
            Classification::Symlink => FileOutcome::SkippedSymlink,
            Classification::Missing => FileOutcome::SkippedMissing,
            Classification::Binary(reason) => FileOutcome::SkippedBinary(reason),
            Classification::Text => match embed(sink, relative, &path) {
                Ok(()) => FileOutcome::Processed,
                Err(e) => FileOutcome::Errored(e.to_string()),
            },
        }
    }

    fn output_error(&self, source: io::Error) -> PipelineError {
        PipelineError::Output {
            path: self.output.clone(),
            source,
        }
    }
}

fn embed(sink: &mut File, relative: &str, path: &Path) -> io::Result<()> {
    let content = fs::read_to_string(path)?;
    sink.write_all(format_file_section(relative, &content).as_bytes())
}
