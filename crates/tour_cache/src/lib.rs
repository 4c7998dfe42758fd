//! The compiled lesson cache and the service that answers lesson queries.
//!
//! [`build_cache`] compiles every lesson file of a content directory once,
//! at startup, into a [`LessonCache`]. The cache has no mutating methods: it
//! is handed to a [`LessonService`], which serves single lessons verbatim and
//! answers "all lessons" requests by splicing the cached JSON documents into
//! one object (see [`splice`]).

#![warn(missing_docs)]

pub mod build;
pub mod cache;
pub mod error;
pub mod service;
pub mod splice;

pub use build::{
    build_cache, build_cache_with_renderer, build_cache_with_report, compile_lesson_file,
    BuildOptions, BuildReport, SkippedLesson,
};
pub use cache::LessonCache;
pub use error::{InitError, LessonError, LookupError};
pub use service::LessonService;
pub use tour_config::FailurePolicy;
