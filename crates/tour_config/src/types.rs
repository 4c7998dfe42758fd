//! Configuration types deserialized from `tour.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The top-level configuration parsed from `tour.toml`.
#[derive(Debug, Deserialize)]
pub struct TourConfig {
    /// Tour metadata and content location.
    pub tour: TourMeta,
    /// Lesson build settings.
    #[serde(default)]
    pub build: BuildConfig,
    /// Section rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

impl TourConfig {
    /// Returns the lesson directory, resolved against the project root.
    pub fn content_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.tour.content)
    }
}

/// Tour metadata required in every `tour.toml`.
#[derive(Debug, Deserialize)]
pub struct TourMeta {
    /// The tour name, shown in build output.
    pub name: String,
    /// Directory holding the lesson files, relative to the project root.
    #[serde(default = "default_content")]
    pub content: String,
    /// File extension of lesson files, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_content() -> String {
    "content".to_string()
}

fn default_extension() -> String {
    "article".to_string()
}

/// Lesson build settings.
#[derive(Debug, Default, Deserialize)]
pub struct BuildConfig {
    /// Compile lesson files on a thread pool.
    #[serde(default)]
    pub parallel: bool,
    /// What to do when a lesson fails to compile.
    #[serde(default)]
    pub on_error: FailurePolicy,
}

/// What the cache build does when a single lesson fails to compile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole build; no cache is produced.
    #[default]
    Abort,
    /// Leave the lesson out, log it, and report it in the build report.
    Skip,
}

/// Section rendering settings.
#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Leave runnable code out of page markup so the client can show it
    /// in an editor.
    #[serde(default = "default_play")]
    pub play: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            play: default_play(),
        }
    }
}

fn default_play() -> bool {
    true
}
