//! Shared foundational types used across the tour lesson toolchain.
//!
//! This crate provides the content [`Fingerprint`] attached to every runnable
//! code fragment and the [`LessonId`] under which compiled lessons are cached
//! and served.

#![warn(missing_docs)]

pub mod fingerprint;
pub mod lesson_id;

pub use fingerprint::Fingerprint;
pub use lesson_id::LessonId;
