//! Per-language project generators.
//!
//! # Adding a New Language
//!
//! 1. Write a type implementing [`LanguageInterface`] with its own
//!    [`LanguageProfile`] (pattern, templates, default rules, commands)
//! 2. Register it in [`LanguageRegistry::builtin`] (or at runtime with
//!    [`LanguageRegistry::register`])
//! 3. That's it. Extraction, default resolution and rendering are shared.
//!
//! Every generation call runs `parse -> resolve -> render` and either
//! returns the complete file map or the first error.

use regex::Regex;

use crate::domain::{
    defaults::DefaultRules,
    error::DomainError,
    project::{GeneratedProject, ProjectCommands, RenderedProject},
    signature::{self, Param, Signature, SignatureMatch},
    template::{FileTemplate, RenderContext},
};

pub mod c;
pub mod golang;
pub mod python3;
pub mod registry;

pub use c::CLanguage;
pub use golang::GoLanguage;
pub use python3::Python3Language;
pub use registry::LanguageRegistry;

/// Label printed before the solution's result by every test harness.
pub const OUTPUT_RESULT_PREFIX: &str = "result:";

/// Immutable per-language constants.
///
/// Built once when the registry is constructed and never mutated.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Identifier used for dispatch, e.g. `golang`.
    pub slug: &'static str,
    /// Human-readable name, e.g. `Go`. Used in project directory patterns.
    pub display_name: &'static str,
    /// Extra identifiers accepted for this language.
    pub aliases: &'static [&'static str],
    pub signature_pattern: &'static Regex,
    pub files: Vec<FileTemplate>,
    pub defaults: DefaultRules,
    /// Joins the per-parameter setup statements in the test harness.
    pub setup_separator: &'static str,
    pub commands: Option<ProjectCommands>,
}

/// The capability set every supported language provides.
///
/// Only `profile`, `parse_params` and the harness hooks are language
/// specific; extraction and rendering are provided methods.
pub trait LanguageInterface: Send + Sync {
    fn profile(&self) -> &LanguageProfile;

    /// Turn the raw parameter text into `(name, type)` pairs.
    fn parse_params(&self, raw: &str) -> Vec<Param>;

    /// Map the captured return type to its canonical spelling; `""` is void.
    fn normalize_return_type(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    fn resolve_default(&self, ty: &str) -> String {
        self.profile().defaults.resolve(ty)
    }

    /// The stub's declaration line, without its body.
    fn declaration(&self, found: &SignatureMatch<'_>, sig: &Signature) -> String;

    /// Statement declaring one placeholder argument in the test harness.
    fn setup_statement(&self, param: &Param) -> String;

    /// How a declared parameter is passed in the solution call.
    fn call_argument(&self, param: &Param) -> String {
        param.name.clone()
    }

    /// Harness statement calling the solution. Captures the result unless
    /// the function is void.
    fn invocation(&self, found: &SignatureMatch<'_>, sig: &Signature, args: &str) -> String;

    /// Harness statement printing the outcome of the call.
    fn result_display(&self, sig: &Signature) -> String;

    fn return_statement(&self, sig: &Signature) -> String {
        if sig.is_void() {
            String::new()
        } else {
            format!("return {}", self.resolve_default(&sig.return_type))
        }
    }

    /// Body lines of the stub, each terminated by a newline.
    fn stub_body(&self, _found: &SignatureMatch<'_>, sig: &Signature) -> String {
        let mut body = String::from("    // TODO: Implement solution\n");
        if !sig.is_void() {
            body.push_str(&format!("    {}\n", self.return_statement(sig)));
        }
        body
    }

    fn extract_signature<'a>(
        &self,
        source: &'a str,
    ) -> Result<(SignatureMatch<'a>, Signature), DomainError> {
        let profile = self.profile();
        let found = signature::extract(profile.slug, profile.signature_pattern, source)?;
        let sig = Signature {
            name: found.name.to_string(),
            params: self.parse_params(found.params),
            return_type: self.normalize_return_type(found.return_type),
        };
        Ok((found, sig))
    }

    /// Field values shared by all templates of this language.
    fn render_context(&self, found: &SignatureMatch<'_>, sig: &Signature) -> RenderContext {
        let setup = sig
            .params
            .iter()
            .map(|p| self.setup_statement(p))
            .collect::<Vec<_>>()
            .join(self.profile().setup_separator);
        let args = sig
            .params
            .iter()
            .map(|p| self.call_argument(p))
            .collect::<Vec<_>>()
            .join(", ");

        RenderContext::new()
            .with_field("NAME", sig.name.as_str())
            .with_field("PARAMS", found.params.trim())
            .with_field("RETURN_TYPE", sig.return_type.as_str())
            .with_field("HEADER", found.header.trim_end())
            .with_field("SIGNATURE", self.declaration(found, sig))
            .with_field("SUPPLEMENTAL_CODE", found.prelude)
            .with_field("PARAMS_SETUP", setup)
            .with_field("INVOCATION", self.invocation(found, sig, &args))
            .with_field("PARAMS_CALL", args)
            .with_field("RETURN_STATEMENT", self.return_statement(sig))
            .with_field("STUB_BODY", self.stub_body(found, sig))
            .with_field("RESULT_DISPLAY", self.result_display(sig))
            .with_field("OUTPUT_RESULT_PREFIX", OUTPUT_RESULT_PREFIX)
    }

    /// Generate the complete project for `source`.
    fn render(&self, source: &str) -> Result<GeneratedProject, DomainError> {
        let (found, sig) = self.extract_signature(source)?;
        let ctx = self.render_context(&found, &sig);

        let profile = self.profile();
        let mut files = RenderedProject::new();
        for file in &profile.files {
            files.add_file(file.path, file.template.render(&ctx)?)?;
        }

        Ok(GeneratedProject {
            language: profile.slug.to_string(),
            files,
            commands: profile.commands.clone(),
        })
    }
}

/// Collapse runs of whitespace to single spaces.
pub(crate) fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
