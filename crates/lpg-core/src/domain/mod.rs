//! Core domain layer for lpg.
//!
//! Pure generation logic: signature extraction, default-value resolution
//! and template rendering. No filesystem, network or process access; those
//! live behind the ports in the application layer.
//!
//! ## Guarantees
//!
//! - **Deterministic**: the same source and language always render the same
//!   bytes (file maps are ordered by path)
//! - **All-or-nothing**: a generation call returns every file or an error
//! - **Read-only profiles**: language data is built once and never mutated

pub mod common;
pub mod defaults;
pub mod error;
pub mod language;
pub mod problem;
pub mod project;
pub mod signature;
pub mod template;

pub use common::RelativePath;
pub use defaults::{DefaultRules, TypeMatcher, TypeRule};
pub use error::{DomainError, ErrorCategory};
pub use language::{
    CLanguage, GoLanguage, LanguageInterface, LanguageProfile, LanguageRegistry,
    OUTPUT_RESULT_PREFIX, Python3Language,
};
pub use problem::{ProblemRef, ProblemTemplate};
pub use project::{GeneratedProject, ProjectCommands, RenderedProject};
pub use signature::{Param, ParamKind, Signature, SignatureMatch};
pub use template::{FileTemplate, RenderContext, Template};
