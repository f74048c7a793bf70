//! Python 3 project generator.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{LanguageInterface, LanguageProfile, OUTPUT_RESULT_PREFIX};
use crate::domain::{
    defaults::{DefaultRules, TypeRule},
    project::ProjectCommands,
    signature::{Param, ParamKind, Signature, SignatureMatch, split_top_level},
    template::FileTemplate,
};

static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^(?P<indent>[ \t]*)def[ \t]+(?P<name>\w+)[ \t]*\((?P<params>[^)]*)\)[ \t]*(?:->[ \t]*(?P<returnType>[^:\n]+?))?[ \t]*:[ \t\r]*$",
    )
    .expect("python signature pattern")
});

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^class[ \t]+(?P<class>\w+)").expect("python class pattern"));

const SOLUTION_FILE_TEMPLATE: &str = "\
from typing import *

{{SUPPLEMENTAL_CODE}}{{HEADER}}
{{STUB_BODY}}";

const TEST_FILE_TEMPLATE: &str = "\
from solution import *


if __name__ == \"__main__\":
    {{PARAMS_SETUP}}
    {{INVOCATION}}
    {{RESULT_DISPLAY}}
";

/// Python 3 implementation of [`LanguageInterface`].
pub struct Python3Language {
    profile: LanguageProfile,
}

impl Python3Language {
    pub fn new() -> Self {
        Self {
            profile: LanguageProfile {
                slug: "python3",
                display_name: "Python3",
                aliases: &["python", "py"],
                signature_pattern: &SIGNATURE_PATTERN,
                files: vec![
                    FileTemplate::new("solution.py", SOLUTION_FILE_TEMPLATE),
                    FileTemplate::new("test.py", TEST_FILE_TEMPLATE),
                ],
                defaults: default_rules(),
                setup_separator: "\n    ",
                commands: Some(ProjectCommands::interpreted(&["python3", "test.py"])),
            },
        }
    }
}

impl Default for Python3Language {
    fn default() -> Self {
        Self::new()
    }
}

fn default_rules() -> DefaultRules {
    DefaultRules::new(
        [
            TypeRule::empty("0"),
            TypeRule::words(
                &[
                    "Optional", "List", "list", "Dict", "dict", "Set", "set", "Tuple", "tuple",
                    "Deque",
                ],
                "None",
            ),
            TypeRule::words(&["int"], "0"),
            TypeRule::words(&["float"], "0.0"),
            TypeRule::words(&["str"], "\"\""),
            TypeRule::words(&["bool"], "False"),
        ],
        |ty| format!("{ty}()"),
    )
}

impl LanguageInterface for Python3Language {
    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// `self`/`cls` and the bare `*` and `/` markers are not call
    /// arguments. Anything after `*` or `*args` can only be passed by name.
    fn parse_params(&self, raw: &str) -> Vec<Param> {
        let mut keyword_only = false;
        let mut params = Vec::new();
        for part in split_top_level(raw) {
            match part {
                "self" | "cls" | "/" => continue,
                "*" => {
                    keyword_only = true;
                    continue;
                }
                _ => {}
            }

            let (head, _default) = part.split_once('=').unwrap_or((part, ""));
            let (name, ty) = head.split_once(':').unwrap_or((head, ""));
            let name = name.trim();

            let kind = if name.starts_with("**") {
                ParamKind::VarKeyword
            } else if name.starts_with('*') {
                keyword_only = true;
                ParamKind::Positional
            } else if keyword_only {
                ParamKind::KeywordOnly
            } else {
                ParamKind::Positional
            };
            params.push(Param::new(name.trim_start_matches('*'), ty.trim()).with_kind(kind));
        }
        params
    }

    fn normalize_return_type(&self, raw: &str) -> String {
        match raw.trim() {
            "None" => String::new(),
            ty => ty.to_string(),
        }
    }

    fn declaration(&self, found: &SignatureMatch<'_>, _sig: &Signature) -> String {
        found.header.trim().to_string()
    }

    fn setup_statement(&self, param: &Param) -> String {
        match param.kind {
            ParamKind::VarKeyword => format!("{} = {{}}", param.name),
            _ => format!("{} = {}", param.name, self.resolve_default(&param.ty)),
        }
    }

    fn call_argument(&self, param: &Param) -> String {
        match param.kind {
            ParamKind::Positional => param.name.clone(),
            ParamKind::KeywordOnly => format!("{0}={0}", param.name),
            ParamKind::VarKeyword => format!("**{}", param.name),
        }
    }

    fn invocation(&self, found: &SignatureMatch<'_>, sig: &Signature, args: &str) -> String {
        let call = match enclosing_class(found) {
            Some(class) => format!("{class}().{}({args})", sig.name),
            None => format!("{}({args})", sig.name),
        };
        if sig.is_void() {
            call
        } else {
            format!("result = {call}")
        }
    }

    fn result_display(&self, sig: &Signature) -> String {
        let mut args = vec![format!("\"{OUTPUT_RESULT_PREFIX}\"")];
        if sig.is_void() {
            args.extend(sig.param_names().map(str::to_string));
        } else {
            args.push("result".into());
        }
        format!("print({})", args.join(", "))
    }

    fn stub_body(&self, found: &SignatureMatch<'_>, sig: &Signature) -> String {
        let indent = format!("{}    ", leading_whitespace(found.header));
        let last = if sig.is_void() {
            "pass".to_string()
        } else {
            self.return_statement(sig)
        };
        format!("{indent}# TODO: Implement solution\n{indent}{last}\n")
    }
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}

/// The class an indented `def` belongs to. LeetCode wraps most Python
/// solutions in `class Solution`.
fn enclosing_class<'a>(found: &SignatureMatch<'a>) -> Option<&'a str> {
    if leading_whitespace(found.header).is_empty() {
        return None;
    }
    let class = CLASS_NAME
        .captures_iter(found.prelude)
        .last()
        .and_then(|caps| caps.name("class"))
        .map_or("Solution", |m| m.as_str());
    Some(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SUM: &str = "class Solution:\n    def twoSum(self, nums: List[int], target: int) -> List[int]:\n        ";

    fn py() -> Python3Language {
        Python3Language::new()
    }

    #[test]
    fn unannotated_params_default_to_zero() {
        let project = py().render("def add(a, b) -> int:\n    pass\n").unwrap();

        let test = project.files.get("test.py").unwrap();
        assert!(test.contains("    a = 0\n    b = 0\n"));
        assert!(test.contains("    result = add(a, b)\n"));
        assert!(test.contains("    print(\"result:\", result)\n"));

        let solution = project.files.get("solution.py").unwrap();
        assert_eq!(
            solution,
            "from typing import *\n\ndef add(a, b) -> int:\n    # TODO: Implement solution\n    return 0\n"
        );
    }

    #[test]
    fn method_is_called_on_its_class() {
        let project = py().render(TWO_SUM).unwrap();

        let test = project.files.get("test.py").unwrap();
        assert!(test.contains("nums = None"));
        assert!(test.contains("target = 0"));
        assert!(test.contains("result = Solution().twoSum(nums, target)"));

        let solution = project.files.get("solution.py").unwrap();
        assert!(solution.contains(
            "class Solution:\n    def twoSum(self, nums: List[int], target: int) -> List[int]:\n        # TODO: Implement solution\n        return None\n"
        ));
    }

    #[test]
    fn self_and_markers_are_skipped() {
        let params = py().parse_params("self, a, /, b, *args, k: int = 3, **kwargs");
        assert_eq!(
            params,
            vec![
                Param::new("a", ""),
                Param::new("b", ""),
                Param::new("args", ""),
                Param::new("k", "int").with_kind(ParamKind::KeywordOnly),
                Param::new("kwargs", "").with_kind(ParamKind::VarKeyword),
            ]
        );
    }

    #[test]
    fn keyword_only_params_are_passed_by_name() {
        let project = py().render("def f(a, *, k: int, **opts) -> int:\n").unwrap();

        let test = project.files.get("test.py").unwrap();
        assert!(test.contains("    opts = {}\n"));
        assert!(test.contains("    result = f(a, k=k, **opts)\n"));
    }

    #[test]
    fn crlf_templates_are_recognised() {
        let source = "class Solution:\r\n    def add(self, a: int, b: int) -> int:\r\n        \r\n";
        let project = py().render(source).unwrap();

        let test = project.files.get("test.py").unwrap();
        assert!(test.contains("result = Solution().add(a, b)"));

        let solution = project.files.get("solution.py").unwrap();
        assert!(solution.contains("    def add(self, a: int, b: int) -> int:\n        # TODO"));
    }

    #[test]
    fn user_types_are_constructed() {
        let project = py().render("def f(p: Point, h: Hint) -> Point:\n").unwrap();

        let solution = project.files.get("solution.py").unwrap();
        assert!(solution.contains("    return Point()\n"));

        let test = project.files.get("test.py").unwrap();
        assert!(test.contains("    p = Point()\n    h = Hint()\n"));
        assert_eq!(py().resolve_default("Playlist"), "Playlist()");
    }

    #[test]
    fn nested_annotations_stay_whole() {
        let params = py().parse_params("self, grid: List[List[str]], m: Dict[str, int]");
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].ty, "Dict[str, int]");
    }

    #[test]
    fn none_return_is_void() {
        let source = "class Solution:\n    def rotate(self, nums: List[int], k: int) -> None:\n        \"\"\"\n        Do not return anything.\n        \"\"\"\n";
        let project = py().render(source).unwrap();

        let solution = project.files.get("solution.py").unwrap();
        assert!(solution.contains("        pass\n"));

        let test = project.files.get("test.py").unwrap();
        assert!(test.contains("    Solution().rotate(nums, k)\n"));
        assert!(test.contains("print(\"result:\", nums, k)"));
    }

    #[test]
    fn default_rule_order() {
        let py = py();
        assert_eq!(py.resolve_default(""), "0");
        assert_eq!(py.resolve_default("Optional[int]"), "None");
        assert_eq!(py.resolve_default("list[int]"), "None");
        assert_eq!(py.resolve_default("int"), "0");
        assert_eq!(py.resolve_default("float"), "0.0");
        assert_eq!(py.resolve_default("str"), "\"\"");
        assert_eq!(py.resolve_default("bool"), "False");
        assert_eq!(py.resolve_default("TreeNode"), "TreeNode()");
    }

    #[test]
    fn class_without_methods_is_not_a_signature() {
        assert!(py().render("class Solution:\n    pass\n").is_err());
    }

    #[test]
    fn interpreted_without_compile_step() {
        let commands = py().profile().commands.clone().unwrap();
        assert!(commands.compile.is_none());
        assert_eq!(commands.run, vec!["python3", "test.py"]);
    }
}
