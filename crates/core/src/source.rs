//! Source provider abstraction for filesystem-independent resolution.
//!
//! The [`SourceProvider`] trait abstracts reading argument files so the
//! resolver can be driven from memory in tests or by hosts that keep their
//! configuration somewhere other than the local disk.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Reads the full text of a referenced argument file.
///
/// Each call opens, reads and closes the file; no handle outlives it.
pub trait SourceProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Default provider: paths are read with `std::fs`, relative to the process
/// working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// In-memory provider for testing and embedding.
///
/// Maps paths to file contents. Lookups normalize `.` and `..` without
/// touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl InMemoryProvider {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        let files = files
            .into_iter()
            .map(|(p, src)| (Self::normalize_path(&p), src))
            .collect();
        Self { files }
    }

    /// Builder-style insert.
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.files
            .insert(Self::normalize_path(path.as_ref()), contents.into());
        self
    }

    fn normalize_path(path: &Path) -> PathBuf {
        let mut components = Vec::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !components.is_empty() {
                        components.pop();
                    }
                }
                other => components.push(other),
            }
        }
        components.iter().collect()
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        let normalized = Self::normalize_path(path);
        self.files.get(&normalized).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found in memory: {}", normalized.display()),
            )
        })
    }
}

impl<P: SourceProvider + ?Sized> SourceProvider for &P {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        (**self).read_source(path)
    }
}
