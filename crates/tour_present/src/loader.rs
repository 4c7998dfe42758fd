//! Loading of code files referenced by `.code` and `.play` directives.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves and reads the code files a document refers to.
pub trait CodeLoader {
    /// Returns the path a directive's `path` argument refers to.
    fn resolve(&self, path: &Path) -> PathBuf;

    /// Reads the bytes of a resolved path.
    fn read(&self, resolved: &Path) -> io::Result<Vec<u8>>;
}

/// Reads code files from disk relative to a base directory, normally the
/// directory holding the lesson file.
#[derive(Debug, Clone)]
pub struct FsCodeLoader {
    base: PathBuf,
}

impl FsCodeLoader {
    /// Creates a loader resolving paths against `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl CodeLoader for FsCodeLoader {
    fn resolve(&self, path: &Path) -> PathBuf {
        self.base.join(path)
    }

    fn read(&self, resolved: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(resolved)
    }
}

/// Serves code files from memory. Useful for tests and for embedding
/// lessons without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MapCodeLoader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MapCodeLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, returning the loader for chaining.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl CodeLoader for MapCodeLoader {
    fn resolve(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }

    fn read(&self, resolved: &Path) -> io::Result<Vec<u8>> {
        self.files.get(resolved).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", resolved.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_loader_resolves_against_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("basics")).unwrap();
        std::fs::write(dir.path().join("basics/packages.go"), "package main\n").unwrap();

        let loader = FsCodeLoader::new(dir.path());
        let resolved = loader.resolve(Path::new("basics/packages.go"));
        assert_eq!(resolved, dir.path().join("basics/packages.go"));
        assert_eq!(loader.read(&resolved).unwrap(), b"package main\n");
    }

    #[test]
    fn fs_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FsCodeLoader::new(dir.path());
        let resolved = loader.resolve(Path::new("nope.go"));
        assert!(loader.read(&resolved).is_err());
    }

    #[test]
    fn map_loader() {
        let loader = MapCodeLoader::new().with_file("hello.go", "package main");
        let resolved = loader.resolve(Path::new("hello.go"));
        assert_eq!(loader.read(&resolved).unwrap(), b"package main");
        let err = loader.read(Path::new("other.go")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
