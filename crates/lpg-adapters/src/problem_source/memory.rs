//! In-memory problem source for testing.

use std::collections::BTreeMap;

use lpg_core::{
    application::ports::ProblemSource,
    domain::{ProblemRef, ProblemTemplate},
    error::LpgResult,
};

use super::fetch_failed;

/// Templates keyed by `(title slug, language slug)`.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    templates: BTreeMap<(String, String), ProblemTemplate>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template for `slug`, keyed by the template's own `langSlug`.
    pub fn with_template(mut self, slug: impl Into<String>, template: ProblemTemplate) -> Self {
        self.templates
            .insert((slug.into(), template.lang_slug.clone()), template);
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl ProblemSource for InMemorySource {
    fn fetch(&self, problem: &ProblemRef, language: &str) -> LpgResult<ProblemTemplate> {
        self.templates
            .get(&(problem.slug().to_string(), language.to_string()))
            .cloned()
            .ok_or_else(|| fetch_failed(problem, language, "no template registered"))
    }
}
