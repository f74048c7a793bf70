//! Problem source adapters.

mod memory;
mod snippet_dir;
mod source_file;

pub use memory::InMemorySource;
pub use snippet_dir::SnippetDirectorySource;
pub use source_file::SourceFileSource;

use lpg_core::{application::ApplicationError, domain::ProblemRef, error::LpgError};

fn fetch_failed(problem: &ProblemRef, language: &str, reason: impl Into<String>) -> LpgError {
    ApplicationError::FetchFailed {
        slug: problem.slug().to_string(),
        language: language.to_string(),
        reason: reason.into(),
    }
    .into()
}
