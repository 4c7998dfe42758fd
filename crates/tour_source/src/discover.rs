//! Discovery of lesson source files in a content directory.

use std::io;
use std::path::{Path, PathBuf};
use tour_common::LessonId;

/// A lesson source file paired with the id it will be served under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPath {
    /// The lesson id derived from the file name.
    pub id: LessonId,
    /// Path to the lesson source file.
    pub path: PathBuf,
}

/// Lists the lesson files directly inside `dir`.
///
/// Only files (or symlinks to files) whose name ends in `.<extension>` are
/// returned; subdirectories (which usually hold the lessons' code files)
/// are not descended into. The result is sorted by id so build logs are reproducible.
pub fn discover_lessons(dir: &Path, extension: &str) -> Result<Vec<LessonPath>, io::Error> {
    let mut lessons = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        // follows symlinks; a dangling link is not a lesson
        if !path.is_file() {
            continue;
        }
        if let Some(id) = LessonId::from_path(&path, extension) {
            lessons.push(LessonPath { id, path });
        }
    }
    lessons.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(lessons)
}
