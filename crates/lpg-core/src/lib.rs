//! lpg Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for lpg, a
//! generator of ready-to-run local projects for LeetCode-style problems.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             lpg-cli (CLI)               │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │            (ProjectService)             │
//! │          Orchestrates Use Cases         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Driven: ProblemSource, Filesystem,     │
//! │          CommandRunner)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     lpg-adapters (Infrastructure)       │
//! │ (SnippetDirectorySource, LocalFs, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Signature, DefaultRules, Template,    │
//! │           LanguageRegistry)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lpg_core::domain::LanguageRegistry;
//!
//! let registry = LanguageRegistry::builtin();
//! let project = registry
//!     .generate("golang", "func Add(a int, b int) int {\n}")
//!     .unwrap();
//!
//! let harness = project.files.get("test.go").unwrap();
//! assert!(harness.contains("result := solution.Add(a, b)"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreatedProject, ProjectLocation, ProjectRequest, ProjectService,
        ports::{CommandOutcome, CommandRunner, Filesystem, ProblemSource},
    };
    pub use crate::domain::{
        GeneratedProject, LanguageInterface, LanguageRegistry, ProblemRef, ProblemTemplate,
        ProjectCommands, RenderedProject, Signature,
    };
    pub use crate::error::{ErrorCategory, LpgError, LpgResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
