//! Command runner that records invocations instead of spawning processes.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use lpg_core::{
    application::ports::{CommandOutcome, CommandRunner},
    error::{LpgError, LpgResult},
};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: Vec<String>,
    pub cwd: PathBuf,
}

/// Records every command and reports success unless told otherwise.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    log: Arc<Mutex<Vec<RecordedCommand>>>,
    // Exit codes keyed by program name.
    exit_codes: BTreeMap<String, i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with `code`.
    pub fn with_exit_code(mut self, program: impl Into<String>, code: i32) -> Self {
        self.exit_codes.insert(program.into(), code);
        self
    }

    /// Everything run so far, in order.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &[String], cwd: &Path) -> LpgResult<CommandOutcome> {
        let mut log = self.log.lock().map_err(|_| LpgError::Internal {
            message: "recording runner lock poisoned".into(),
        })?;
        log.push(RecordedCommand {
            command: command.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        let code = command
            .first()
            .and_then(|program| self.exit_codes.get(program))
            .copied()
            .unwrap_or(0);
        Ok(CommandOutcome { code: Some(code) })
    }
}
