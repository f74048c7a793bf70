// ============================================================================
// domain/error.rs - GENERATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep them in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors (user supplied something we cannot work with)
    // ========================================================================
    #[error("no {language} function signature found in template starting with '{excerpt}'")]
    NoSignatureFound { language: String, excerpt: String },

    #[error("unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    #[error("invalid problem reference '{input}': {reason}")]
    InvalidProblemReference { input: String, reason: String },

    #[error("invalid project file path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    // ========================================================================
    // Profile Defects (a language profile disagrees with its own templates)
    // ========================================================================
    #[error("template '{template}' references field '{field}' which has no value")]
    MissingField { template: String, field: String },

    #[error("duplicate path in rendered project: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoSignatureFound { language, .. } => vec![
                format!("The template does not contain a {language} function header"),
                "Check that --lang matches the language of the code template".into(),
                "Only the first function in a template is used".into(),
            ],
            Self::UnsupportedLanguage { language } => vec![
                format!("'{language}' has no registered project generator"),
                "Try: lpg languages".into(),
            ],
            Self::InvalidProblemReference { .. } => vec![
                "Pass the dash-separated title slug, e.g. --title-slug two-sum".into(),
                "Or a problem URL, e.g. --url https://leetcode.com/problems/two-sum/".into(),
            ],
            Self::MissingField { template, .. } => vec![
                format!("The built-in '{template}' template is inconsistent"),
                "This is a bug in lpg, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoSignatureFound { .. }
            | Self::InvalidProblemReference { .. }
            | Self::InvalidPath { .. } => ErrorCategory::Validation,
            Self::UnsupportedLanguage { .. } => ErrorCategory::NotFound,
            Self::MissingField { .. } | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for errors caused by a defect in a language profile rather than
    /// by user input.
    pub fn is_defect(&self) -> bool {
        self.category() == ErrorCategory::Internal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
