//! Application layer for lpg.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ProjectService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. Extraction and rendering live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CreatedProject, ProjectLocation, ProjectRequest, ProjectService};

pub use ports::{CommandOutcome, CommandRunner, Filesystem, ProblemSource};

pub use error::ApplicationError;
