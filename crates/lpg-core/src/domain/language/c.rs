//! C project generator.
//!
//! The stub is split into a header and an implementation file so the test
//! harness can be compiled against the declaration alone.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{LanguageInterface, LanguageProfile, OUTPUT_RESULT_PREFIX, squash_whitespace};
use crate::domain::{
    defaults::{DefaultRules, TypeRule},
    project::ProjectCommands,
    signature::{Param, Signature, SignatureMatch, split_top_level},
    template::FileTemplate,
};

static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^(?P<returnType>[A-Za-z_][\w \t\*]*?)\b(?P<name>\w+)[ \t]*\((?P<params>[^)]*)\)[ \t]*\{",
    )
    .expect("c signature pattern")
});

/// Words that can make up a type on their own (`unsigned`, `struct Node`).
const TYPE_KEYWORDS: &[&str] = &[
    "struct", "enum", "union", "unsigned", "signed", "const", "long", "short",
];

const HEADER_FILE_TEMPLATE: &str = "\
#ifndef SOLUTION_H
#define SOLUTION_H

#include <stdbool.h>
#include <stddef.h>

{{SIGNATURE}};

#endif
";

const SOLUTION_FILE_TEMPLATE: &str = "\
#include <stdlib.h>
#include \"solution.h\"

{{SUPPLEMENTAL_CODE}}{{SIGNATURE}} {
{{STUB_BODY}}}
";

const TEST_FILE_TEMPLATE: &str = "\
#include <stdio.h>
#include \"solution.h\"

int main(void) {
    // Test case setup
    {{PARAMS_SETUP}}

    // Execute solution
    {{INVOCATION}}

    // Display result
    {{RESULT_DISPLAY}}

    return 0;
}
";

/// C implementation of [`LanguageInterface`].
pub struct CLanguage {
    profile: LanguageProfile,
    formats: DefaultRules,
}

impl CLanguage {
    pub fn new() -> Self {
        Self {
            profile: LanguageProfile {
                slug: "c",
                display_name: "C",
                aliases: &[],
                signature_pattern: &SIGNATURE_PATTERN,
                files: vec![
                    FileTemplate::new("solution.h", HEADER_FILE_TEMPLATE),
                    FileTemplate::new("solution.c", SOLUTION_FILE_TEMPLATE),
                    FileTemplate::new("test.c", TEST_FILE_TEMPLATE),
                ],
                defaults: default_rules(),
                setup_separator: "\n    ",
                commands: Some(ProjectCommands::compiled(
                    &["cc", "-o", "test", "test.c", "solution.c"],
                    &["./test"],
                )),
            },
            formats: format_rules(),
        }
    }
}

impl Default for CLanguage {
    fn default() -> Self {
        Self::new()
    }
}

fn default_rules() -> DefaultRules {
    DefaultRules::new(
        [
            TypeRule::contains(&["*", "[]"], "NULL"),
            TypeRule::words(&["bool"], "false"),
            TypeRule::words(&["char"], "'\\0'"),
            TypeRule::words(&["float", "double"], "0.0"),
            TypeRule::words(
                &["int", "uint", "long", "short", "size_t", "unsigned", "signed"],
                "0",
            ),
        ],
        |ty| format!("({ty}){{0}}"),
    )
}

/// `printf` conversions for the result, in the same first-match style.
fn format_rules() -> DefaultRules {
    DefaultRules::new(
        [
            TypeRule::contains(&["*"], "%p"),
            TypeRule::words(&["bool"], "%s"),
            TypeRule::words(&["char"], "%c"),
            TypeRule::words(&["double", "float"], "%f"),
            TypeRule::words(&["unsigned long long"], "%llu"),
            TypeRule::words(&["long long"], "%lld"),
            TypeRule::words(&["unsigned long"], "%lu"),
            TypeRule::words(&["long"], "%ld"),
            TypeRule::words(&["size_t"], "%zu"),
            TypeRule::words(&["unsigned", "uint"], "%u"),
            TypeRule::words(&["int", "short", "signed"], "%d"),
        ],
        |_| String::new(),
    )
}

impl LanguageInterface for CLanguage {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn parse_params(&self, raw: &str) -> Vec<Param> {
        let parts = split_top_level(raw);
        if parts == ["void"] {
            return Vec::new();
        }
        parts
            .iter()
            .enumerate()
            .map(|(i, part)| parse_param(i, part))
            .collect()
    }

    fn normalize_return_type(&self, raw: &str) -> String {
        match normalize_type(raw).as_str() {
            "void" => String::new(),
            ty => ty.to_string(),
        }
    }

    fn declaration(&self, found: &SignatureMatch<'_>, sig: &Signature) -> String {
        format!(
            "{} {}({})",
            squash_whitespace(found.return_type),
            sig.name,
            found.params.trim()
        )
    }

    fn setup_statement(&self, param: &Param) -> String {
        format!(
            "{} {} = {};",
            param.ty,
            param.name,
            self.resolve_default(&param.ty)
        )
    }

    fn invocation(&self, _found: &SignatureMatch<'_>, sig: &Signature, args: &str) -> String {
        if sig.is_void() {
            format!("{}({args});", sig.name)
        } else {
            format!("{} result = {}({args});", sig.return_type, sig.name)
        }
    }

    fn result_display(&self, sig: &Signature) -> String {
        if sig.is_void() {
            return format!("puts(\"{OUTPUT_RESULT_PREFIX} (void)\");");
        }
        match self.formats.resolve(&sig.return_type).as_str() {
            "" => format!("puts(\"{OUTPUT_RESULT_PREFIX} <unprintable>\");"),
            "%p" => format!("printf(\"{OUTPUT_RESULT_PREFIX} %p\\n\", (void *)result);"),
            "%s" => format!(
                "printf(\"{OUTPUT_RESULT_PREFIX} %s\\n\", result ? \"true\" : \"false\");"
            ),
            spec => format!("printf(\"{OUTPUT_RESULT_PREFIX} {spec}\\n\", result);"),
        }
    }

    fn return_statement(&self, sig: &Signature) -> String {
        if sig.is_void() {
            String::new()
        } else {
            format!("return {};", self.resolve_default(&sig.return_type))
        }
    }
}

/// Split `int *nums` into name and type. Array suffixes become pointers,
/// and a declaration with no identifier gets an ordinal name.
fn parse_param(ordinal: usize, part: &str) -> Param {
    let mut decl = part.trim();
    let mut depth = 0;
    while let Some(stripped) = decl.strip_suffix(']') {
        match stripped.rfind('[') {
            Some(open) => {
                decl = stripped[..open].trim_end();
                depth += 1;
            }
            None => break,
        }
    }

    let name_start = decl
        .rfind(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .map_or(0, |i| i + 1);
    let (ty, name) = decl.split_at(name_start);

    let unnamed = ty.trim().is_empty()
        || ty
            .split_whitespace()
            .all(|word| TYPE_KEYWORDS.contains(&word));
    if unnamed || name.is_empty() {
        return Param::unnamed(ordinal, normalize_type(part));
    }

    let mut ty = normalize_type(ty);
    ty.push_str(&"*".repeat(depth));
    Param::new(name, ty)
}

/// `int  *` becomes `int*`.
fn normalize_type(ty: &str) -> String {
    squash_whitespace(ty).replace(" *", "*")
}
