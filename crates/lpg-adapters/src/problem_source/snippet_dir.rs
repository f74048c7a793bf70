//! Problem source backed by saved LeetCode API responses.
//!
//! Each problem is a `<title-slug>.json` file in one directory. Two shapes
//! are accepted: the raw GraphQL response
//! (`{"data": {"question": {"codeSnippets": [...]}}}`) and the bare
//! `{"codeSnippets": [...]}` object.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use lpg_core::{
    application::ports::ProblemSource,
    domain::{ProblemRef, ProblemTemplate},
    error::LpgResult,
};

use super::fetch_failed;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnippetFile {
    Graphql { data: GraphqlData },
    Bare(Snippets),
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    question: Snippets,
}

#[derive(Debug, Deserialize)]
struct Snippets {
    #[serde(rename = "codeSnippets")]
    code_snippets: Vec<ProblemTemplate>,
}

impl SnippetFile {
    fn into_snippets(self) -> Vec<ProblemTemplate> {
        match self {
            Self::Graphql { data } => data.question.code_snippets,
            Self::Bare(snippets) => snippets.code_snippets,
        }
    }
}

/// Reads `<dir>/<title-slug>.json`.
#[derive(Debug, Clone)]
pub struct SnippetDirectorySource {
    dir: PathBuf,
}

impl SnippetDirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, problem: &ProblemRef) -> PathBuf {
        self.dir.join(format!("{}.json", problem.slug()))
    }
}

impl ProblemSource for SnippetDirectorySource {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn fetch(&self, problem: &ProblemRef, language: &str) -> LpgResult<ProblemTemplate> {
        let path = self.file_for(problem);
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            fetch_failed(problem, language, format!("cannot read {}: {e}", path.display()))
        })?;

        let snippets = serde_json::from_str::<SnippetFile>(&raw)
            .map_err(|e| {
                fetch_failed(
                    problem,
                    language,
                    format!("{} is not a codeSnippets document: {e}", path.display()),
                )
            })?
            .into_snippets();
        debug!(count = snippets.len(), path = %path.display(), "Loaded code snippets");

        let available: Vec<String> = snippets.iter().map(|s| s.lang_slug.clone()).collect();
        snippets
            .into_iter()
            .find(|s| s.lang_slug.eq_ignore_ascii_case(language))
            .ok_or_else(|| {
                fetch_failed(
                    problem,
                    language,
                    format!("no {language} snippet (available: {})", available.join(", ")),
                )
            })
    }
}
