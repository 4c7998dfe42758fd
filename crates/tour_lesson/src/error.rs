//! Error types for lesson compilation.

use crate::render::RenderError;

/// Errors that abort the compilation of a lesson.
///
/// A lesson is compiled completely or not at all; there is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The renderer failed on one of the lesson's sections.
    #[error("failed to render section '{title}': {source}")]
    Render {
        /// Title of the section that failed.
        title: String,
        /// The renderer's error.
        source: RenderError,
    },

    /// The lesson could not be serialized.
    #[error("failed to encode lesson: {0}")]
    Encode(#[source] serde_json::Error),
}
