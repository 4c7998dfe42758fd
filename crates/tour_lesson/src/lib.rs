//! Compilation of parsed lesson documents into servable JSON.
//!
//! The [`compile`] entry point renders every top-level section of a document,
//! collects the runnable code inside it with [`extract_play_code`], attaches
//! a [`Fingerprint`](tour_common::Fingerprint) to each code file, and encodes
//! the resulting [`Lesson`] as canonical JSON bytes ready to be cached.

#![warn(missing_docs)]

pub mod compile;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

pub use compile::{build_lesson, compile, compile_document, CompiledLesson};
pub use error::CompileError;
pub use extract::{extract_play_code, find_play_code};
pub use model::{CodeFile, Lesson, Page};
pub use render::{HtmlRenderer, RenderError, RenderTemplate, Renderer};
