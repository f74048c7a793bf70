use std::collections::BTreeMap;

use crate::domain::{common::RelativePath, error::DomainError};

/// Rendered file contents keyed by project-relative path.
///
/// This is the output of a generation call. It contains no behaviour beyond
/// bookkeeping and is handed straight to the materializer. Iteration order is
/// by path, so two generations of the same input are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedProject {
    files: BTreeMap<RelativePath, String>,
}

impl RenderedProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, rejecting unsafe or duplicate paths.
    pub fn add_file(&mut self, path: &str, content: String) -> Result<(), DomainError> {
        let path = RelativePath::try_new(path)?;
        if self.files.contains_key(&path) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.files.insert(path, content);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        let path = RelativePath::try_new(path).ok()?;
        self.files.get(&path).map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.files.iter().map(|(p, c)| (p, c.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.files.keys()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Build and run command lines for languages whose harness needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCommands {
    pub compile: Option<Vec<String>>,
    pub run: Vec<String>,
}

impl ProjectCommands {
    pub fn interpreted(run: &[&str]) -> Self {
        Self {
            compile: None,
            run: to_owned(run),
        }
    }

    pub fn compiled(compile: &[&str], run: &[&str]) -> Self {
        Self {
            compile: Some(to_owned(compile)),
            run: to_owned(run),
        }
    }
}

fn to_owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| (*a).to_string()).collect()
}

/// The full result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Slug of the language that produced the files.
    pub language: String,
    pub files: RenderedProject,
    pub commands: Option<ProjectCommands>,
}
