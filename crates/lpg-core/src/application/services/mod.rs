//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "run its harness".

pub mod location;
pub mod project_service;

pub use location::ProjectLocation;
pub use project_service::{CreatedProject, ProjectRequest, ProjectService};
