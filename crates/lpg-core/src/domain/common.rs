use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::DomainError;

/// A project file path guaranteed to stay inside the project directory.
///
/// Invariant: never absolute, never contains `..`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let invalid = |reason: &str| DomainError::InvalidPath {
            path: path.display().to_string(),
            reason: reason.into(),
        };

        if path.as_os_str().is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.is_absolute() || path.has_root() {
            return Err(invalid("absolute paths are not allowed"));
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(invalid("'..' components are not allowed"));
        }

        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
