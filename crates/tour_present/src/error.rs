//! Error types for present-format parsing.

use std::path::PathBuf;

/// Errors that can occur while parsing a lesson document.
///
/// Every variant that refers to a location carries the 1-indexed source line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The first line of the document is blank or missing.
    #[error("missing document title")]
    MissingTitle,

    /// A `.` directive other than `.code` or `.play`.
    #[error("line {line}: unknown directive '{directive}'")]
    UnknownDirective {
        /// Source line of the directive.
        line: u32,
        /// The directive name including the leading dot.
        directive: String,
    },

    /// A `.code` or `.play` directive that could not be understood.
    #[error("line {line}: invalid directive '{text}': {reason}")]
    InvalidDirective {
        /// Source line of the directive.
        line: u32,
        /// The full directive line.
        text: String,
        /// Why the directive was rejected.
        reason: String,
    },

    /// A heading that is more than one level deeper than its parent.
    #[error("line {line}: section level {found} cannot follow level {current}")]
    SkippedSectionLevel {
        /// Source line of the heading.
        line: u32,
        /// The level of the enclosing section (0 outside any section).
        current: usize,
        /// The level of the offending heading.
        found: usize,
    },

    /// A directive that appears before the first section heading.
    #[error("line {line}: '{text}' must appear inside a section")]
    ContentOutsideSection {
        /// Source line of the content.
        line: u32,
        /// The offending line.
        text: String,
    },

    /// A code file referenced by `.code` or `.play` could not be read.
    #[error("line {line}: cannot read code file {path}: {source}")]
    CodeLoad {
        /// Source line of the directive.
        line: u32,
        /// The path as resolved by the loader.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl ParseError {
    /// Returns the source line this error refers to, if any.
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseError::MissingTitle => None,
            ParseError::UnknownDirective { line, .. }
            | ParseError::InvalidDirective { line, .. }
            | ParseError::SkippedSectionLevel { line, .. }
            | ParseError::ContentOutsideSection { line, .. }
            | ParseError::CodeLoad { line, .. } => Some(*line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_title() {
        assert_eq!(ParseError::MissingTitle.to_string(), "missing document title");
        assert_eq!(ParseError::MissingTitle.line(), None);
    }

    #[test]
    fn display_unknown_directive() {
        let err = ParseError::UnknownDirective {
            line: 12,
            directive: ".image".to_string(),
        };
        assert_eq!(err.to_string(), "line 12: unknown directive '.image'");
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn display_skipped_level() {
        let err = ParseError::SkippedSectionLevel {
            line: 4,
            current: 1,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "line 4: section level 3 cannot follow level 1"
        );
    }

    #[test]
    fn display_code_load() {
        let err = ParseError::CodeLoad {
            line: 9,
            path: PathBuf::from("basics/packages.go"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("line 9: cannot read code file basics/packages.go"));
        assert!(msg.contains("file not found"));
    }
}
