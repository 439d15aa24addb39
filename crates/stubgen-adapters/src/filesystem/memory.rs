//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stubgen_core::application::ports::{ArtifactWriter, StubReader};

/// In-memory filesystem for testing.
///
/// Mirrors the directory semantics of [`super::LocalFilesystem`]: writing
/// into a directory that was never created fails, so the missing-directory
/// failure mode is testable without touching disk.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory (and its ancestors) as existing.
    pub fn add_directory(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.into().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_directory(parent);
        }
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StubReader for MemoryFilesystem {
    fn read_stub(&self, path: &Path) -> stubgen_core::error::StubgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| stubgen_core::application::ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            stubgen_core::application::ApplicationError::StubRead {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }
}

impl ArtifactWriter for MemoryFilesystem {
    fn write_artifact(&self, path: &Path, content: &str) -> stubgen_core::error::StubgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| stubgen_core::application::ApplicationError::LockPoisoned)?;

        // Same contract as the local adapter: the parent must already exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(stubgen_core::application::ApplicationError::ArtifactWrite {
                    path: path.to_path_buf(),
                    reason: "destination directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_file_is_readable_as_stub() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("app/Stubs/Service.stub", "class {{name}}Service {}");
        assert_eq!(
            fs.read_stub(Path::new("app/Stubs/Service.stub")).unwrap(),
            "class {{name}}Service {}"
        );
    }

    #[test]
    fn write_requires_existing_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs
            .write_artifact(Path::new("app/Services/A.php"), "x")
            .is_err());

        fs.add_directory("app/Services");
        assert!(fs
            .write_artifact(Path::new("app/Services/A.php"), "x")
            .is_ok());
    }

    #[test]
    fn clear_removes_everything() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("a/b.txt", "x");
        fs.clear();
        assert!(fs.list_files().is_empty());
        assert!(!fs.exists(Path::new("a")));
    }
}
