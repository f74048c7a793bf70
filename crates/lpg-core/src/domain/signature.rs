//! Function signature extraction.
//!
//! Each language supplies one multiline regex with named groups `name`,
//! `params` and (optionally) `returnType`. Only the first match in the
//! source text is used; a template holding several functions yields the
//! first one.

use regex::Regex;

use crate::domain::error::DomainError;

/// Maximum length of the source excerpt quoted in `NoSignatureFound`.
const EXCERPT_LEN: usize = 60;

/// How an argument is bound at the call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParamKind {
    #[default]
    Positional,
    /// Must be passed by name (after a bare `*` in Python).
    KeywordOnly,
    /// Collects remaining keyword arguments (`**kwargs`).
    VarKeyword,
}

/// A single function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub kind: ParamKind,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            kind: ParamKind::Positional,
        }
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    /// Parameter with an ordinal placeholder name (`param0`, `param1`, ...).
    pub fn unnamed(ordinal: usize, ty: impl Into<String>) -> Self {
        Self::new(format!("param{ordinal}"), ty)
    }
}

/// The function name, parameter list and return type of a solution stub.
///
/// An empty `return_type` means the function returns nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: String,
}

impl Signature {
    pub fn is_void(&self) -> bool {
        self.return_type.is_empty()
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

/// Raw captures of a signature pattern, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureMatch<'a> {
    pub name: &'a str,
    pub params: &'a str,
    pub return_type: &'a str,
    /// Everything before the matched header (doc comments, type definitions).
    pub prelude: &'a str,
    /// The matched header text itself.
    pub header: &'a str,
}

/// Apply `pattern` to `source` and return the first match.
pub fn extract<'a>(
    language: &str,
    pattern: &Regex,
    source: &'a str,
) -> Result<SignatureMatch<'a>, DomainError> {
    let no_match = || DomainError::NoSignatureFound {
        language: language.to_string(),
        excerpt: excerpt(source),
    };

    let caps = pattern.captures(source).ok_or_else(no_match)?;
    let whole = caps.get(0).ok_or_else(no_match)?;
    let name = caps.name("name").ok_or_else(no_match)?;

    Ok(SignatureMatch {
        name: name.as_str(),
        params: caps.name("params").map_or("", |m| m.as_str()),
        return_type: caps.name("returnType").map_or("", |m| m.as_str().trim()),
        prelude: &source[..whole.start()],
        header: whole.as_str(),
    })
}

/// First non-blank line of `source`, shortened for error messages.
fn excerpt(source: &str) -> String {
    let line = source
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    if line.chars().count() > EXCERPT_LEN {
        let short: String = line.chars().take(EXCERPT_LEN).collect();
        format!("{short}...")
    } else {
        line.to_string()
    }
}

/// Split a parameter list on commas that are not nested inside brackets.
///
/// `Dict[str, int], k: int` splits into two entries, not three.
pub fn split_top_level(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in params.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(params[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(params[start..].trim());

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        Regex::new(r"(?m)^fn (?P<name>\w+)\((?P<params>[^)]*)\)(?: -> (?P<returnType>\w+))?")
            .unwrap()
    }

    #[test]
    fn extracts_named_groups_and_prelude() {
        let source = "// doc\nfn add(a, b) -> int\n";
        let m = extract("test", &pattern(), source).unwrap();

        assert_eq!(m.name, "add");
        assert_eq!(m.params, "a, b");
        assert_eq!(m.return_type, "int");
        assert_eq!(m.prelude, "// doc\n");
        assert_eq!(m.header, "fn add(a, b) -> int");
    }

    #[test]
    fn missing_return_group_is_void() {
        let m = extract("test", &pattern(), "fn run()").unwrap();
        assert_eq!(m.return_type, "");
        assert_eq!(m.params, "");
    }

    #[test]
    fn only_first_function_is_used() {
        let m = extract("test", &pattern(), "fn first(a)\nfn second(b)\n").unwrap();
        assert_eq!(m.name, "first");
    }

    #[test]
    fn no_match_reports_language_and_excerpt() {
        let err = extract("test", &pattern(), "\n\n  class Foo:\n").unwrap_err();
        assert_eq!(
            err,
            DomainError::NoSignatureFound {
                language: "test".into(),
                excerpt: "class Foo:".into(),
            }
        );
    }

    #[test]
    fn long_excerpt_is_truncated() {
        let source = "x".repeat(200);
        let DomainError::NoSignatureFound { excerpt, .. } =
            extract("test", &pattern(), &source).unwrap_err()
        else {
            panic!("expected NoSignatureFound");
        };
        assert_eq!(excerpt.len(), EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn split_respects_brackets() {
        assert_eq!(
            split_top_level("d: Dict[str, int], k: int"),
            vec!["d: Dict[str, int]", "k: int"]
        );
        assert_eq!(split_top_level("  "), Vec::<&str>::new());
        assert_eq!(split_top_level("a int, b int,"), vec!["a int", "b int"]);
    }

    #[test]
    fn unnamed_params_use_ordinal_names() {
        assert_eq!(Param::unnamed(2, "int"), Param::new("param2", "int"));
    }
}
