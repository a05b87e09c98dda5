pub mod classify;
pub mod config;
pub mod console;
pub mod format;
pub mod git;
pub mod pipeline;
pub mod runner;

pub use classify::{classify, BinaryReason, Classification};
pub use git::{is_repository, ls_files, repo_info, GitError, RepositoryInfo};
pub use pipeline::{ContextPipeline, FileOutcome, PipelineError, RunStats};
pub use runner::{CommandOutput, CommandRunner, ScriptedRunner, SystemRunner};
