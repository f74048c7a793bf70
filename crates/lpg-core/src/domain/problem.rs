//! Problem references and the code templates fetched for them.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug"));
static PROBLEM_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/problems/(?P<slug>[A-Za-z0-9-]+)").expect("problem url"));

/// A problem identified by its dash-separated title slug (`two-sum`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemRef {
    slug: String,
}

impl ProblemRef {
    /// Validate a title slug as it appears in problem URLs.
    pub fn from_slug(slug: &str) -> Result<Self, DomainError> {
        let slug = slug.trim();
        if SLUG.is_match(slug) {
            Ok(Self { slug: slug.into() })
        } else {
            Err(DomainError::InvalidProblemReference {
                input: slug.into(),
                reason: "title slugs are lowercase words separated by dashes".into(),
            })
        }
    }

    /// Extract the slug from a problem URL such as
    /// `https://leetcode.com/problems/two-sum/description/`.
    pub fn from_url(url: &str) -> Result<Self, DomainError> {
        let slug = PROBLEM_URL
            .captures(url)
            .and_then(|caps| caps.name("slug"))
            .ok_or_else(|| DomainError::InvalidProblemReference {
                input: url.into(),
                reason: "URL does not contain a '/problems/<slug>' segment".into(),
            })?;
        Self::from_slug(&slug.as_str().to_ascii_lowercase())
    }

    /// Prefer an explicit slug; fall back to the URL.
    pub fn resolve(slug: Option<&str>, url: Option<&str>) -> Result<Self, DomainError> {
        match (slug, url) {
            (Some(slug), _) => Self::from_slug(slug),
            (None, Some(url)) => Self::from_url(url),
            (None, None) => Err(DomainError::InvalidProblemReference {
                input: String::new(),
                reason: "either a title slug or a problem URL is required".into(),
            }),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl fmt::Display for ProblemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}

/// One language's code template for a problem.
///
/// Field names follow the `codeSnippets` entries of the LeetCode API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemTemplate {
    #[serde(rename = "langSlug")]
    pub lang_slug: String,
    /// Display name, e.g. `Python3` or `Go`.
    pub lang: String,
    pub code: String,
}
