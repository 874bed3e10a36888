//! External tool invocation
//!
//! Every subprocess the scaffolder starts goes through the `ToolRunner`
//! trait so the pipeline can be exercised in tests without touching the
//! real package manager. The production implementation inherits stdio -
//! the generator and installer print their own progress and the user
//! should see it.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{ScaffoldError, Step};

/// A fully described external command: program, arguments, and the
/// directory to run it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Executes external tools on behalf of the scaffold pipeline.
pub trait ToolRunner {
    /// Run a command to completion. Non-zero exit (or failure to start)
    /// is a `DependencyFailure` naming `step`.
    fn run(&self, step: Step, command: &ToolCommand) -> Result<(), ScaffoldError>;
}

/// Runs tools as real subprocesses with inherited stdio.
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, step: Step, command: &ToolCommand) -> Result<(), ScaffoldError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .map_err(|e| ScaffoldError::DependencyFailure {
                step,
                status: None,
                reason: format!("failed to start '{}': {}", command.program, e),
            })?;

        if !status.success() {
            return Err(ScaffoldError::DependencyFailure {
                step,
                status: status.code(),
                reason: match status.code() {
                    Some(code) => format!("'{}' exited with status {}", command.program, code),
                    None => format!("'{}' was terminated by a signal", command.program),
                },
            });
        }

        Ok(())
    }
}
