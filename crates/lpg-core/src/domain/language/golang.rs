//! Go project generator.
//!
//! Produces a `solution` package plus a `main` test harness in the same
//! module, so `go build` works without GOPATH tricks.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{LanguageInterface, LanguageProfile, OUTPUT_RESULT_PREFIX};
use crate::domain::{
    defaults::{DefaultRules, TypeRule},
    project::ProjectCommands,
    signature::{Param, Signature, SignatureMatch, split_top_level},
    template::FileTemplate,
};

static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*func[ \t]+(?P<name>\w+)[ \t]*\((?P<params>[^)]*)\)[ \t]*(?P<returnType>[^{\n]*?)[ \t]*\{",
    )
    .expect("go signature pattern")
});

// Exported identifiers not already qualified by a package.
static EXPORTED_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[^\w.])([A-Z]\w*)").expect("go exported type pattern"));

const GO_MOD_TEMPLATE: &str = "\
module lpg

go 1.21
";

const SOLUTION_FILE_TEMPLATE: &str = "\
package solution

{{SUPPLEMENTAL_CODE}}{{SIGNATURE}} {
{{STUB_BODY}}}
";

const TEST_FILE_TEMPLATE: &str = "\
package main

import (
    \"fmt\"

    \"lpg/solution\"
)

func main() {
    // Test case setup
    {{PARAMS_SETUP}}

    // Execute solution
    {{INVOCATION}}

    // Display result
    {{RESULT_DISPLAY}}
}
";

/// Go implementation of [`LanguageInterface`].
pub struct GoLanguage {
    profile: LanguageProfile,
}

impl GoLanguage {
    pub fn new() -> Self {
        Self {
            profile: LanguageProfile {
                slug: "golang",
                display_name: "Go",
                aliases: &["go"],
                signature_pattern: &SIGNATURE_PATTERN,
                files: vec![
                    FileTemplate::new("go.mod", GO_MOD_TEMPLATE),
                    FileTemplate::new("solution/solution.go", SOLUTION_FILE_TEMPLATE),
                    FileTemplate::new("test.go", TEST_FILE_TEMPLATE),
                ],
                defaults: default_rules(),
                setup_separator: "; ",
                commands: Some(ProjectCommands::compiled(
                    &["go", "build", "-o", "test", "test.go"],
                    &["./test"],
                )),
            },
        }
    }
}

impl Default for GoLanguage {
    fn default() -> Self {
        Self::new()
    }
}

fn default_rules() -> DefaultRules {
    DefaultRules::new(
        [
            // Reference and container markers first: `[]int` and `*int` are not ints.
            TypeRule::contains(&["*", "[]", "map[", "chan ", "func("], "nil"),
            TypeRule::words(&["interface", "any", "error"], "nil"),
            TypeRule::words(&["int", "uint", "uintptr", "byte", "rune"], "0"),
            TypeRule::words(&["float", "complex"], "0.0"),
            TypeRule::words(&["string"], "\"\""),
            TypeRule::words(&["bool"], "false"),
        ],
        |ty| format!("{ty}{{}}"),
    )
}

impl LanguageInterface for GoLanguage {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Go parameter lists are either all named (`a, b int, s string`) or
    /// all unnamed (`int, string`). Names without a type share the type of
    /// the next named entry.
    fn parse_params(&self, raw: &str) -> Vec<Param> {
        let parts = split_top_level(raw);
        let named = parts.iter().any(|p| p.split_whitespace().nth(1).is_some());

        if !named {
            return parts
                .iter()
                .enumerate()
                .map(|(i, ty)| Param::unnamed(i, *ty))
                .collect();
        }

        let mut params = Vec::with_capacity(parts.len());
        let mut shared_type = String::new();
        for part in parts.iter().rev() {
            match part.split_once(char::is_whitespace) {
                Some((name, ty)) => {
                    shared_type = ty.trim().to_string();
                    params.push(Param::new(name, ty.trim()));
                }
                None => params.push(Param::new(*part, shared_type.as_str())),
            }
        }
        params.reverse();
        params
    }

    fn declaration(&self, found: &SignatureMatch<'_>, sig: &Signature) -> String {
        let mut decl = format!("func {}({})", exported(&sig.name), found.params.trim());
        if !sig.is_void() {
            decl.push(' ');
            decl.push_str(&sig.return_type);
        }
        decl
    }

    fn setup_statement(&self, param: &Param) -> String {
        let ty = declared_type(&param.ty);
        let value = self.resolve_default(&ty);

        if value == "nil" {
            format!("var {} {}", param.name, qualify(&ty))
        } else if infers_to(&ty, &value) {
            format!("{} := {}", param.name, qualify(&value))
        } else {
            format!("var {} {} = {}", param.name, qualify(&ty), qualify(&value))
        }
    }

    fn call_argument(&self, param: &Param) -> String {
        if param.ty.starts_with("...") {
            format!("{}...", param.name)
        } else {
            param.name.clone()
        }
    }

    fn invocation(&self, _found: &SignatureMatch<'_>, sig: &Signature, args: &str) -> String {
        let call = format!("solution.{}({args})", exported(&sig.name));
        if sig.is_void() {
            call
        } else {
            format!("result := {call}")
        }
    }

    fn result_display(&self, sig: &Signature) -> String {
        if sig.is_void() {
            let mut args = vec![format!("\"{OUTPUT_RESULT_PREFIX}\"")];
            args.extend(sig.param_names().map(str::to_string));
            format!("fmt.Println({})", args.join(", "))
        } else {
            format!("fmt.Printf(\"{OUTPUT_RESULT_PREFIX} %v\\n\", result)")
        }
    }
}

/// `main` lives in another package, so the solution function must be
/// exported: `twoSum` becomes `TwoSum`.
fn exported(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Variadic `...T` parameters are declared as slices.
fn declared_type(ty: &str) -> String {
    match ty.strip_prefix("...") {
        Some(elem) => format!("[]{elem}"),
        None => ty.to_string(),
    }
}

/// Whether `name := value` gives the variable exactly the type `ty`.
fn infers_to(ty: &str, value: &str) -> bool {
    matches!(
        (ty, value),
        ("int", "0") | ("float64", "0.0") | ("string", "\"\"") | ("bool", "false")
    ) || value == format!("{ty}{{}}")
}

/// Types declared in the solution package must be qualified in `main`.
fn qualify(spelling: &str) -> String {
    EXPORTED_TYPE
        .replace_all(spelling, "${1}solution.${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn go() -> GoLanguage {
        GoLanguage::new()
    }

    #[test]
    fn extracts_add_signature() {
        let (_, sig) = go().extract_signature("func Add(a int, b int) int {").unwrap();
        assert_eq!(sig.name, "Add");
        assert_eq!(sig.params, vec![Param::new("a", "int"), Param::new("b", "int")]);
        assert_eq!(sig.return_type, "int");
    }

    #[test]
    fn void_function_matches_with_empty_return() {
        let (_, sig) = go().extract_signature("func rotate(nums []int, k int)  {\n}").unwrap();
        assert_eq!(sig.name, "rotate");
        assert!(sig.is_void());
    }

    #[test]
    fn grouped_names_share_type() {
        let params = go().parse_params("a, b int, s string");
        assert_eq!(
            params,
            vec![
                Param::new("a", "int"),
                Param::new("b", "int"),
                Param::new("s", "string"),
            ]
        );
    }

    #[test]
    fn unnamed_params_get_ordinal_names() {
        let params = go().parse_params("int, []string");
        assert_eq!(
            params,
            vec![Param::new("param0", "int"), Param::new("param1", "[]string")]
        );
    }

    #[test]
    fn reference_markers_precede_base_types() {
        let go = go();
        for ty in ["*int", "[]int", "map[string]int", "[][]int", "*TreeNode", "chan int"] {
            assert_eq!(go.resolve_default(ty), "nil", "type {ty}");
        }
        assert_eq!(go.resolve_default("interface{}"), "nil");
    }

    #[test]
    fn base_types_and_structs() {
        let go = go();
        assert_eq!(go.resolve_default("int64"), "0");
        assert_eq!(go.resolve_default("byte"), "0");
        assert_eq!(go.resolve_default("float64"), "0.0");
        assert_eq!(go.resolve_default("string"), "\"\"");
        assert_eq!(go.resolve_default("bool"), "false");
        assert_eq!(go.resolve_default("Point"), "Point{}");
    }

    #[test]
    fn setup_statements_keep_go_types() {
        let go = go();
        assert_eq!(go.setup_statement(&Param::new("a", "int")), "a := 0");
        assert_eq!(go.setup_statement(&Param::new("n", "int64")), "var n int64 = 0");
        assert_eq!(go.setup_statement(&Param::new("xs", "[]int")), "var xs []int");
        assert_eq!(
            go.setup_statement(&Param::new("root", "*TreeNode")),
            "var root *solution.TreeNode"
        );
        assert_eq!(
            go.setup_statement(&Param::new("p", "Point")),
            "p := solution.Point{}"
        );
    }

    #[test]
    fn variadic_params_are_spread() {
        let go = go();
        let p = Param::new("nums", "...int");
        assert_eq!(go.setup_statement(&p), "var nums []int");
        assert_eq!(go.call_argument(&p), "nums...");
    }

    #[test]
    fn function_names_are_exported() {
        assert_eq!(exported("twoSum"), "TwoSum");
        assert_eq!(exported("Add"), "Add");
    }

    #[test]
    fn qualify_skips_builtins_and_qualified_names() {
        assert_eq!(qualify("map[string]*Node"), "map[string]*solution.Node");
        assert_eq!(qualify("list.List"), "list.List");
        assert_eq!(qualify("[]int"), "[]int");
    }

    #[test]
    fn renders_add_project() {
        let project = go().render("func Add(a int, b int) int {\n\n}").unwrap();

        let solution = project.files.get("solution/solution.go").unwrap();
        assert!(solution.contains("func Add(a int, b int) int {"));
        assert!(solution.contains("    return 0\n"));

        let test = project.files.get("test.go").unwrap();
        assert!(test.contains("a := 0; b := 0"));
        assert!(test.contains("result := solution.Add(a, b)"));
        assert!(test.contains("fmt.Printf(\"result: %v\\n\", result)"));

        assert_eq!(project.files.get("go.mod"), Some("module lpg\n\ngo 1.21\n"));
    }

    #[test]
    fn void_project_has_no_result_or_return() {
        let project = go().render("func moveZeroes(nums []int)  {\n}").unwrap();

        let solution = project.files.get("solution/solution.go").unwrap();
        assert!(solution.contains("func MoveZeroes(nums []int) {"));
        assert!(!solution.contains("return"));

        let test = project.files.get("test.go").unwrap();
        assert!(!test.contains("result :="));
        assert!(test.contains("    solution.MoveZeroes(nums)\n"));
        assert!(test.contains("fmt.Println(\"result:\", nums)"));
    }

    #[test]
    fn struct_types_are_not_base_types() {
        let source = "type Point struct{}\nfunc dist(p Point) Point {\n}";
        let project = go().render(source).unwrap();

        let solution = project.files.get("solution/solution.go").unwrap();
        assert!(solution.contains("    return Point{}\n"));

        let test = project.files.get("test.go").unwrap();
        assert!(test.contains("p := solution.Point{}"));
        assert!(!test.contains("= 0"));

        let go = go();
        for ty in ["Hint", "Joint", "Constraint"] {
            assert_eq!(go.resolve_default(ty), format!("{ty}{{}}"));
        }
        assert_eq!(go.resolve_default("uint8"), "0");
        assert_eq!(go.resolve_default("error"), "nil");
    }

    #[test]
    fn leetcode_prelude_is_kept() {
        let source = "/**\n * Definition for singly-linked list.\n */\nfunc reverseList(head *ListNode) *ListNode {\n    \n}";
        let project = go().render(source).unwrap();
        let solution = project.files.get("solution/solution.go").unwrap();

        assert!(solution.starts_with("package solution\n\n/**\n * Definition"));
        assert!(solution.contains("    return nil\n"));
    }

    #[test]
    fn compile_then_run() {
        let commands = go().profile().commands.clone().unwrap();
        assert_eq!(
            commands.compile.unwrap(),
            vec!["go", "build", "-o", "test", "test.go"]
        );
        assert_eq!(commands.run, vec!["./test"]);
    }
}
