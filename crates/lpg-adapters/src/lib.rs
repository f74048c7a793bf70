//! Infrastructure adapters for lpg.
//!
//! This crate implements the ports defined in `lpg_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod problem_source;
pub mod runner;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use problem_source::{InMemorySource, SnippetDirectorySource, SourceFileSource};
pub use runner::{ProcessRunner, RecordedCommand, RecordingRunner};
