//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use lpg_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{LpgError, LpgResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> LpgResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> LpgResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> LpgResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> LpgError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("two-sum/solution");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("solution.go"), "package solution\n").unwrap();

        assert!(fs.exists(&dir.join("solution.go")));
        assert_eq!(
            std::fs::read_to_string(dir.join("solution.go")).unwrap(),
            "package solution\n"
        );
    }

    #[test]
    fn write_without_parent_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing/test.py");

        let err = LocalFilesystem::new().write_file(&target, "").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("p");
        fs.create_dir_all(&root.join("a/b")).unwrap();

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
