//! CLI errors, their exit codes and how they are reported on stderr.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use lpg_core::error::LpgError;

pub use lpg_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments that parse but make no sense together.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unreadable config, or no problem source configured.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A failure inside `lpg-core`; `stage` is what the CLI was doing.
    #[error("{stage} failed: {source}")]
    Core {
        stage: String,
        #[source]
        source: LpgError,
    },

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Show the config location with 'lpg config path'".into(),
                "Use 'lpg init' to create a default config".into(),
            ],

            Self::Core { source, .. } => source.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core { source, .. } => match source.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 for usage errors, 3 when a template or language is missing,
    /// 4 for configuration problems, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The message shown on stderr: the failure, its causes when
    /// `verbose`, then suggestions.
    pub fn report(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: Style| {
            if colored {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("error:", Style::new().red().bold()),
            paint(&self.to_string(), Style::new().red())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("caused by: {err}");
                out.push_str(&format!("  {}\n", paint(&line, Style::new().dimmed())));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint("help:", Style::new().yellow().bold())));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Re-run with -v for more detail.", Style::new().dimmed())
            ));
        }
        out
    }

    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, "{}", self)
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, "{}", self)
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "underlying error");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach what the CLI was doing to an io or core error.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, LpgError> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::Core {
            stage: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use lpg_core::application::ApplicationError;
    use lpg_core::domain::DomainError;

    fn core(source: impl Into<LpgError>) -> CliError {
        CliError::Core {
            stage: "Generation".into(),
            source: source.into(),
        }
    }

    #[test]
    fn core_message_names_the_stage() {
        let err = core(DomainError::NoSignatureFound {
            language: "golang".into(),
            excerpt: "// empty".into(),
        });
        assert!(err.to_string().starts_with("Generation failed: "));
    }

    #[test]
    fn project_exists_suggests_force() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/test"),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
        assert_eq!(err.exit_code(), 2);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let err = core(ApplicationError::FetchFailed {
            slug: "two-sum".into(),
            language: "c".into(),
            reason: "missing".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn plain_report_lists_suggestions() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        });
        let report = err.report(false, false);
        assert!(report.starts_with("\nerror: Generation failed: Project already exists"));
        assert!(report.contains("help:\n  - "));
        assert!(report.contains("Re-run with -v"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_shows_causes() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let report = err.report(true, false);
        assert!(report.contains("caused by: disk full"));
        assert!(!report.contains("Re-run with -v"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_core_error_keeps_stage() {
        let result: Result<(), LpgError> = Err(LpgError::Internal {
            message: "x".into(),
        });
        match result.with_cli_context(|| "Writing project") {
            Err(CliError::Core { stage, .. }) => assert_eq!(stage, "Writing project"),
            other => panic!("expected Core, got {other:?}"),
        }
    }
}
