//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `lpg-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ProblemRef, ProblemTemplate};
use crate::error::LpgResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `lpg_adapters::filesystem::LocalFilesystem` (production)
/// - `lpg_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LpgResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> LpgResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> LpgResult<()>;
}

/// Port for obtaining a problem's code template.
///
/// Implemented by:
/// - `lpg_adapters::problem_source::SnippetDirectorySource` (saved API responses)
/// - `lpg_adapters::problem_source::SourceFileSource` (a single code file)
/// - `lpg_adapters::problem_source::InMemorySource` (testing)
pub trait ProblemSource: Send + Sync {
    /// The code template for `problem` in the language with slug `language`.
    fn fetch(&self, problem: &ProblemRef, language: &str) -> LpgResult<ProblemTemplate>;
}

/// Exit status of an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running build, run and VCS commands.
///
/// Implemented by:
/// - `lpg_adapters::runner::ProcessRunner` (production)
/// - `lpg_adapters::runner::RecordingRunner` (testing)
pub trait CommandRunner: Send + Sync {
    /// Run `command` (program followed by arguments) inside `cwd`.
    ///
    /// Only failing to start the program is an error; a non-zero exit is
    /// reported through the outcome.
    fn run(&self, command: &[String], cwd: &Path) -> LpgResult<CommandOutcome>;
}
