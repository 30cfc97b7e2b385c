//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crudkit_core::application::ports::Filesystem;
use crudkit_core::error::CrudkitResult;

/// In-memory filesystem for testing.
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

    /// File content lookup (testing helper).
    pub fn file_content(&self, path: &Path) -> Option<String> {
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

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| crudkit_core::application::ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| crudkit_core::application::ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(crudkit_core::application::ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> CrudkitResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| crudkit_core::application::ApplicationError::StoreLockError)?;
        Ok(inner.files.get(path).cloned())
    }

    fn append_file(&self, path: &Path, content: &str) -> CrudkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| crudkit_core::application::ApplicationError::StoreLockError)?;

        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
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
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("app/Models/Task.php");

        assert!(fs.write_file(path, "x").is_err());

        fs.create_dir_all(Path::new("app/Models")).unwrap();
        assert!(fs.write_file(path, "x").is_ok());
        assert_eq!(fs.file_content(path).unwrap(), "x");
    }

    #[test]
    fn append_creates_missing_file() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("routes/api.php");

        fs.append_file(path, "line\n").unwrap();
        fs.append_file(path, "more\n").unwrap();
        assert_eq!(fs.file_content(path).unwrap(), "line\nmore\n");
    }

    #[test]
    fn read_missing_file_is_none() {
        let fs = MemoryFilesystem::new();
        assert_eq!(fs.read_file(Path::new("nope")).unwrap(), None);
    }
}
