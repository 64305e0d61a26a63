//! Upload-store lookup: finding a file's staged content by original path.
//!
//! The extractor never reads the filesystem itself; it receives a
//! [`ContentLookup`] collaborator. The production implementation,
//! [`UploadStore`], mirrors the staging layout of the upload flow: one
//! folder per uploaded project under a common root, each preserving the
//! project's relative paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves an original relative path to staged file content.
pub trait ContentLookup: Send + Sync {
    /// Returns the file's text, or `None` when no staged copy exists.
    ///
    /// # Errors
    ///
    /// Returns an error only for real I/O failures; a miss is `Ok(None)`.
    fn lookup(&self, original_path: &Path) -> io::Result<Option<String>>;
}

/// Staging-directory lookup over `<root>/<project>/<original_path>`.
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Creates a store over the given uploads root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// First-level project folders, sorted for deterministic hits.
    fn project_dirs(&self) -> io::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

impl ContentLookup for UploadStore {
    fn lookup(&self, original_path: &Path) -> io::Result<Option<String>> {
        if !self.root.is_dir() {
            tracing::debug!("uploads root missing: {}", self.root.display());
            return Ok(None);
        }

        for project in self.project_dirs()? {
            let candidate = project.join(original_path);
            if candidate.is_file() {
                tracing::debug!("resolved {} -> {}", original_path.display(), candidate.display());
                return fs::read_to_string(&candidate).map(Some);
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_root_is_a_miss_not_an_error() {
        let store = UploadStore::new("/nonexistent/uploads");
        assert_eq!(store.lookup(Path::new("A.java")).unwrap(), None);
    }

    #[test]
    fn finds_file_in_any_project_folder() {
        let tmp = TempDir::new().unwrap();
        let b = tmp.path().join("project-b").join("src");
        fs::create_dir_all(tmp.path().join("project-a")).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(b.join("A.java"), "class A {}").unwrap();

        let store = UploadStore::new(tmp.path());
        let content = store.lookup(Path::new("src/A.java")).unwrap();
        assert_eq!(content.as_deref(), Some("class A {}"));
    }

    #[test]
    fn first_project_in_sorted_order_wins() {
        let tmp = TempDir::new().unwrap();
        for (project, body) in [("alpha", "class First {}"), ("beta", "class Second {}")] {
            let dir = tmp.path().join(project);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("A.java"), body).unwrap();
        }

        let store = UploadStore::new(tmp.path());
        let content = store.lookup(Path::new("A.java")).unwrap();
        assert_eq!(content.as_deref(), Some("class First {}"));
    }

    #[test]
    fn unknown_relative_path_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("project")).unwrap();

        let store = UploadStore::new(tmp.path());
        assert_eq!(store.lookup(Path::new("nope/B.java")).unwrap(), None);
    }
}
