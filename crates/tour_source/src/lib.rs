//! Lesson source files and lesson discovery.
//!
//! This crate provides [`SourceFile`] for holding a lesson's text and its
//! fingerprint, and [`discover_lessons`] for enumerating
//! the lesson files of a content directory.

#![warn(missing_docs)]

pub mod discover;
pub mod source_file;

pub use discover::{discover_lessons, LessonPath};
pub use source_file::SourceFile;
