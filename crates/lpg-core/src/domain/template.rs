//! File templates and their render context.
//!
//! Templates use `{{FIELD}}` placeholders (upper snake case). Rendering
//! validates first: every placeholder must have a value in the
//! [`RenderContext`], otherwise `MissingField` is returned and no output is
//! produced. Substitution is a single left-to-right pass, so values that
//! happen to contain `{{...}}` are copied verbatim.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::DomainError;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("placeholder pattern"));

/// A named template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    text: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.text) {
            if let Some(field) = caps.get(1) {
                if !seen.contains(&field.as_str()) {
                    seen.push(field.as_str());
                }
            }
        }
        seen
    }

    /// Placeholders with no value in `ctx`.
    pub fn missing_fields(&self, ctx: &RenderContext) -> Vec<&'static str> {
        self.placeholders()
            .into_iter()
            .filter(|field| ctx.get(field).is_none())
            .collect()
    }

    /// Substitute every placeholder, failing on the first missing field.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, DomainError> {
        if let Some(field) = self.missing_fields(ctx).first() {
            return Err(DomainError::MissingField {
                template: self.name.to_string(),
                field: (*field).to_string(),
            });
        }

        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(self.text) {
            let (Some(whole), Some(field)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&self.text[last..whole.start()]);
            out.push_str(ctx.get(field.as_str()).unwrap_or_default());
            last = whole.end();
        }
        out.push_str(&self.text[last..]);

        Ok(out)
    }
}

/// A template bound to the relative path it renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: &'static str,
    pub template: Template,
}

impl FileTemplate {
    pub const fn new(path: &'static str, text: &'static str) -> Self {
        Self {
            path,
            template: Template::new(path, text),
        }
    }
}

/// Field values for template substitution.
///
/// Immutable after creation - `with_field` returns a new instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    fields: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field, consuming self.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
