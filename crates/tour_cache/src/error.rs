//! Error types for cache construction and lesson lookup.

use std::path::PathBuf;

use tour_common::LessonId;
use tour_lesson::CompileError;
use tour_present::ParseError;

/// Why a single lesson file could not be compiled.
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    /// The lesson file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The lesson file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The lesson file is not a valid document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Rendering or encoding the lesson failed.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Errors that prevent a [`LessonCache`](crate::LessonCache) from being built.
///
/// When one of these is returned no cache exists, so nothing can be served
/// from a partially compiled lesson set.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The content directory could not be listed.
    #[error("cannot list lessons in {dir}: {source}")]
    Discover {
        /// The content directory.
        dir: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A lesson failed to compile.
    #[error("lesson '{id}': {source}")]
    Lesson {
        /// The id of the failing lesson.
        id: LessonId,
        /// What went wrong.
        source: LessonError,
    },
}

/// Errors returned by lesson queries.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No lesson with this id is cached.
    #[error("lesson not found: {id}")]
    NotFound {
        /// The requested id.
        id: String,
    },

    /// Writing the response failed.
    #[error("failed to write lesson: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    /// Returns `true` for [`LookupError::NotFound`], which callers usually
    /// map to a not-found response rather than an internal error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = LookupError::NotFound {
            id: "nonexistent".to_string(),
        };
        assert_eq!(err.to_string(), "lesson not found: nonexistent");
        assert!(err.is_not_found());
    }

    #[test]
    fn io_is_not_not_found() {
        let err = LookupError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("failed to write lesson:"));
    }

    #[test]
    fn init_error_names_lesson() {
        let err = InitError::Lesson {
            id: LessonId::new("basics"),
            source: LessonError::Parse(ParseError::MissingTitle),
        };
        assert_eq!(
            err.to_string(),
            "lesson 'basics': parse error: missing document title"
        );
    }

    #[test]
    fn discover_display() {
        let err = InitError::Discover {
            dir: PathBuf::from("/srv/content"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/content"));
        assert!(msg.contains("no such directory"));
    }
}
