use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Captured result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        CommandOutput {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        CommandOutput {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Everything that touches an external executable goes through this trait.
///
/// A program that cannot be started is reported as an `io::Error` (kind
/// `NotFound` when the executable is missing); a program that ran and exited
/// non-zero is an `Ok` output with `success == false`.
pub trait CommandRunner {
    fn invoke(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Spawns real processes.
#[derive(Debug, Default, Clone)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        SystemRunner {
            cwd: Some(dir.into()),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn invoke(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(CommandOutput),
    SpawnError(io::ErrorKind, String),
}

/// Answers commands from a fixed table instead of spawning processes.
///
/// Keys are the full command line joined with single spaces, e.g.
/// `"git rev-parse --show-toplevel"`. Unscripted commands fail as if the
/// executable did not exist.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRunner {
    responses: HashMap<String, Scripted>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        ScriptedRunner::default()
    }

    pub fn respond(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.responses
            .insert(command_line.to_string(), Scripted::Output(output));
        self
    }

    pub fn spawn_error(mut self, command_line: &str, kind: io::ErrorKind, message: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            Scripted::SpawnError(kind, message.to_string()),
        );
        self
    }
}

impl CommandRunner for ScriptedRunner {
    fn invoke(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let mut key = program.to_string();
        for arg in args {
            key.push(' ');
            key.push_str(arg);
        }

        match self.responses.get(&key) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::SpawnError(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", program),
            )),
        }
    }
}
