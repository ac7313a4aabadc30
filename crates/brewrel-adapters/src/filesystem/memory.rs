//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use brewrel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::BrewrelResult,
};

/// In-memory filesystem for testing.
///
/// Directories must be registered with [`MemoryFilesystem::add_dir`] before
/// files can be written into them, mirroring the local adapter's
/// requirement that the parent exists.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory and all of its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_atomic(&self, path: &Path, content: &str) -> BrewrelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_atomic(Path::new("/tap/foo.rb"), "x").is_err());

        fs.add_dir("/tap");
        fs.write_atomic(Path::new("/tap/foo.rb"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/tap/foo.rb")).as_deref(), Some("x"));
        assert_eq!(fs.write_count(), 1);
    }

    #[test]
    fn relative_file_needs_no_parent() {
        let fs = MemoryFilesystem::new();
        fs.write_atomic(Path::new("foo.rb"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("foo.rb")).as_deref(), Some("x"));
        assert_eq!(fs.list_files(), vec![PathBuf::from("foo.rb")]);
    }
}
