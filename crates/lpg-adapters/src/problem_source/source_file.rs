//! Problem source that reads one local code file.

use std::path::{Path, PathBuf};

use tracing::debug;

use lpg_core::{
    application::ports::ProblemSource,
    domain::{ProblemRef, ProblemTemplate},
    error::LpgResult,
};

use super::fetch_failed;

/// Uses the contents of a single file as the template for any problem.
///
/// The file is assumed to be written in whatever language is requested;
/// the language's display name is left empty so the generator's own name
/// is used for the project directory.
#[derive(Debug, Clone)]
pub struct SourceFileSource {
    path: PathBuf,
}

impl SourceFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProblemSource for SourceFileSource {
    fn fetch(&self, problem: &ProblemRef, language: &str) -> LpgResult<ProblemTemplate> {
        let code = std::fs::read_to_string(&self.path).map_err(|e| {
            fetch_failed(
                problem,
                language,
                format!("cannot read {}: {e}", self.path.display()),
            )
        })?;
        debug!(path = %self.path.display(), bytes = code.len(), "Read source file");

        Ok(ProblemTemplate {
            lang_slug: language.to_string(),
            lang: String::new(),
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_file_contents_for_requested_language() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("stub.c");
        std::fs::write(&file, "int f(int x) {\n}").unwrap();

        let source = SourceFileSource::new(&file);
        let problem = ProblemRef::from_slug("f").unwrap();
        let template = source.fetch(&problem, "c").unwrap();

        assert_eq!(template.lang_slug, "c");
        assert!(template.lang.is_empty());
        assert_eq!(template.code, "int f(int x) {\n}");
    }

    #[test]
    fn unreadable_file_is_a_fetch_failure() {
        let source = SourceFileSource::new("/definitely/not/here.py");
        let problem = ProblemRef::from_slug("f").unwrap();
        let err = source.fetch(&problem, "python3").unwrap_err();
        assert!(err.to_string().contains("not/here.py"));
    }
}
