//! Where a generated project is written.

use std::path::PathBuf;

use crate::application::ApplicationError;

/// Directory pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "~/Documents/Coding/{language_name}/leetcode/";

const LANGUAGE_NAME: &str = "{language_name}";

/// A directory pattern such as `~/code/{language_name}/leetcode/`.
///
/// The project lives in `<expanded pattern>/<title-slug>`. `{language_name}`
/// expands to the language's display name (`Python3`, `Go`, `C`) and a
/// leading `~` to the home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    pattern: String,
    home: Option<PathBuf>,
}

impl ProjectLocation {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            home: None,
        }
    }

    /// Directory substituted for a leading `~`.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The project directory for `slug` in the language named `language_name`.
    pub fn resolve(&self, language_name: &str, slug: &str) -> Result<PathBuf, ApplicationError> {
        let expanded = self.pattern.replace(LANGUAGE_NAME, language_name);
        let base = self.expand_home(&expanded)?;
        Ok(base.join(slug))
    }

    fn expand_home(&self, pattern: &str) -> Result<PathBuf, ApplicationError> {
        let rest = match pattern.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
            _ => return Ok(PathBuf::from(pattern)),
        };

        let home = self
            .home
            .as_deref()
            .ok_or_else(|| ApplicationError::InvalidProjectPath {
                path: PathBuf::from(pattern),
                reason: "home directory is unknown, cannot expand '~'".into(),
            })?;
        Ok(home.join(rest.trim_start_matches(['/', '\\'])))
    }
}

impl Default for ProjectLocation {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}
