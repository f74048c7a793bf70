//! Placeholder literals for parameter and return types.
//!
//! Resolution is a spelling heuristic, not a type system. Rules are kept in
//! an ordered list so precedence is visible: container and reference markers
//! come before base types, because `[]int` and `*int` both contain `int`.
//! Type names are compared per identifier token, so `Point` never counts as
//! an `int`.

/// Predicate over a type spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatcher {
    /// The spelling is empty (no annotation).
    Empty,
    /// The spelling contains any of the given substrings.
    Contains(&'static [&'static str]),
    /// One of the given names appears among the spelling's identifier
    /// tokens. A name may span several words (`long long`) and also matches
    /// a token that extends it with a bit width (`int64`, `int32_t`).
    Word(&'static [&'static str]),
}

impl TypeMatcher {
    pub fn matches(&self, ty: &str) -> bool {
        match self {
            Self::Empty => ty.is_empty(),
            Self::Contains(markers) => markers.iter().any(|m| ty.contains(m)),
            Self::Word(names) => {
                let tokens = identifier_tokens(ty);
                names.iter().any(|name| contains_words(&tokens, name))
            }
        }
    }
}

fn identifier_tokens(ty: &str) -> Vec<&str> {
    ty.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .collect()
}

fn contains_words(tokens: &[&str], name: &str) -> bool {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }
    tokens.windows(words.len()).any(|window| {
        window
            .iter()
            .zip(&words)
            .all(|(token, word)| word_matches(token, word))
    })
}

fn word_matches(token: &str, word: &str) -> bool {
    match token.strip_prefix(word) {
        Some(rest) => rest.is_empty() || rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

/// One `(predicate, literal)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRule {
    pub matcher: TypeMatcher,
    pub literal: &'static str,
}

impl TypeRule {
    pub const fn contains(markers: &'static [&'static str], literal: &'static str) -> Self {
        Self {
            matcher: TypeMatcher::Contains(markers),
            literal,
        }
    }

    pub const fn words(names: &'static [&'static str], literal: &'static str) -> Self {
        Self {
            matcher: TypeMatcher::Word(names),
            literal,
        }
    }

    pub const fn empty(literal: &'static str) -> Self {
        Self {
            matcher: TypeMatcher::Empty,
            literal,
        }
    }
}

/// Ordered rule set with a fallback for user-defined composite types.
#[derive(Debug, Clone)]
pub struct DefaultRules {
    rules: Vec<TypeRule>,
    fallback: fn(&str) -> String,
}

impl DefaultRules {
    pub fn new(rules: impl Into<Vec<TypeRule>>, fallback: fn(&str) -> String) -> Self {
        Self {
            rules: rules.into(),
            fallback,
        }
    }

    /// First matching rule's literal, or the fallback construction.
    pub fn resolve(&self, ty: &str) -> String {
        let ty = ty.trim();
        self.rule_for(ty)
            .map(|rule| rule.literal.to_string())
            .unwrap_or_else(|| (self.fallback)(ty))
    }

    /// The rule that decides `ty`, if any.
    pub fn rule_for(&self, ty: &str) -> Option<&TypeRule> {
        self.rules.iter().find(|rule| rule.matcher.matches(ty))
    }

    pub fn rules(&self) -> &[TypeRule] {
        &self.rules
    }
}
