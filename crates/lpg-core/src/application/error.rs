//! Application layer errors.
//!
//! These errors represent failures in orchestration, not generation logic.
//! Generation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while fetching, materializing or running a project.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The project directory exists and `force` was not given.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The project directory could not be created.
    #[error("Invalid project path {path}: {reason}")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// No code template could be obtained for the problem.
    #[error("Could not fetch the {language} template for '{slug}': {reason}")]
    FetchFailed {
        slug: String,
        language: String,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A compile or run command could not start or exited unsuccessfully.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// The language has no commands to build or run its projects.
    #[error("Language '{language}' has no run command")]
    NoCommands { language: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it anyway".into(),
                "Or choose another location with --directory".into(),
            ],
            Self::InvalidProjectPath { path, .. } => vec![
                format!("Cannot create: {}", path.display()),
                "Check the --directory pattern and your write permissions".into(),
            ],
            Self::FetchFailed { slug, language, .. } => vec![
                format!("Expected a {language} code snippet for '{slug}'"),
                "Check --problems-dir (or sources.problems_dir in the config)".into(),
                "Or pass the template directly with --source-file".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Make sure the toolchain for `{command}` is installed"),
                "Run the command by hand inside the project directory to see its output".into(),
            ],
            Self::NoCommands { .. } => vec!["Generate the project without --run".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } | Self::NoCommands { .. } => ErrorCategory::Validation,
            Self::FetchFailed { .. } => ErrorCategory::NotFound,
            Self::InvalidProjectPath { .. } | Self::CommandFailed { .. } => {
                ErrorCategory::Configuration
            }
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
