//! Lesson source files as loaded from disk or memory.

use std::io;
use std::path::{Path, PathBuf};
use tour_common::Fingerprint;

/// A lesson source file loaded for compilation.
#[derive(Debug)]
pub struct SourceFile {
    /// The filesystem path of this file (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Fingerprint of the file content.
    pub fingerprint: Fingerprint,
}

impl SourceFile {
    /// Creates a new `SourceFile`, fingerprinting its content.
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let fingerprint = Fingerprint::from_bytes(content.as_bytes());
        Self {
            path: path.into(),
            content,
            fingerprint,
        }
    }

    /// Reads a source file from disk.
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path, content))
    }

    /// Returns the directory containing this file, used to resolve
    /// relative references such as `.play` paths.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Iterates over the lines of the file without their `\n` or `\r\n`
    /// terminators. A trailing newline does not start an extra line.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }
}
