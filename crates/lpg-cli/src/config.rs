//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`LPG__DEFAULTS__LANGUAGE=go`)
//! 3. Config file (`--config FILE` or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use lpg_core::application::services::location::DEFAULT_PATTERN;

const ENV_PREFIX: &str = "LPG";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Where code templates come from.
    pub sources: SourcesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub language: String,
    /// Directory pattern, see `ProjectLocation`.
    pub directory: String,
    pub git_init: bool,
    pub force: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: "c".into(),
            directory: DEFAULT_PATTERN.into(),
            git_init: false,
            force: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory of `<slug>.json` snippet files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file` (or the default location when
    /// it exists) layered under `LPG__*` environment variables.
    ///
    /// An explicitly given file must exist; the default one is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.lpg.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "lpg", "lpg")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".lpg.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_language_is_c() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.language, "c");
        assert_eq!(cfg.defaults.directory, DEFAULT_PATTERN);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nlanguage = \"golang\"\ngit_init = true\n\n[sources]\nproblems_dir = \"/srv/snippets\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.defaults.language, "golang");
        assert!(cfg.defaults.git_init);
        assert_eq!(cfg.defaults.directory, DEFAULT_PATTERN);
        assert_eq!(
            cfg.sources.problems_dir.as_deref(),
            Some(Path::new("/srv/snippets"))
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = AppConfig::load(Some(&temp.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.defaults.language, "c");
        assert!(parsed.sources.problems_dir.is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
