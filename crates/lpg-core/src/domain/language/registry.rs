//! Language lookup by slug or alias.

use std::collections::BTreeMap;

use super::{CLanguage, GoLanguage, LanguageInterface, LanguageProfile, Python3Language};
use crate::domain::{error::DomainError, project::GeneratedProject};

/// Maps language identifiers to their implementations.
///
/// Built once at startup and read-only afterwards, so a shared reference
/// can be used from any number of threads.
pub struct LanguageRegistry {
    languages: BTreeMap<&'static str, Box<dyn LanguageInterface>>,
    aliases: BTreeMap<&'static str, &'static str>,
}

impl LanguageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            languages: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Registry holding every built-in language.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GoLanguage::new()));
        registry.register(Box::new(Python3Language::new()));
        registry.register(Box::new(CLanguage::new()));
        registry
    }

    /// Add a language, replacing any existing one with the same slug.
    pub fn register(
        &mut self,
        language: Box<dyn LanguageInterface>,
    ) -> Option<Box<dyn LanguageInterface>> {
        let profile = language.profile();
        let slug = profile.slug;
        for alias in profile.aliases {
            self.aliases.insert(*alias, slug);
        }
        self.languages.insert(slug, language)
    }

    /// Look up a language by slug or alias, case-insensitively.
    pub fn get(&self, id: &str) -> Result<&dyn LanguageInterface, DomainError> {
        let id = id.trim().to_ascii_lowercase();
        let slug = self.aliases.get(id.as_str()).copied().unwrap_or(id.as_str());
        self.languages
            .get(slug)
            .map(|language| &**language)
            .ok_or_else(|| DomainError::UnsupportedLanguage { language: id.clone() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    /// Extract, resolve and render `source` with the named language.
    pub fn generate(&self, language: &str, source: &str) -> Result<GeneratedProject, DomainError> {
        self.get(language)?.render(source)
    }

    /// Profiles of all registered languages, ordered by slug.
    pub fn profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.languages.values().map(|l| l.profile())
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
