//! Runs commands as child processes with inherited stdio.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use lpg_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner},
    },
    error::LpgResult,
};

/// Production command runner using `std::process`.
///
/// The child's output goes straight to the terminal so compiler errors
/// and the harness result are visible as they happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &[String], cwd: &Path) -> LpgResult<CommandOutcome> {
        let (program, args) = command.split_first().ok_or_else(|| ApplicationError::CommandFailed {
            command: String::new(),
            reason: "empty command line".into(),
        })?;

        debug!(program = %program, cwd = %cwd.display(), "Spawning process");
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.join(" "),
                reason: format!("could not start '{program}': {e}"),
            })?;

        Ok(CommandOutcome {
            code: status.code(),
        })
    }
}
