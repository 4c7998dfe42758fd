//! One-shot construction of the lesson cache from a content directory.

use std::path::Path;

use rayon::prelude::*;
use tour_common::LessonId;
use tour_config::{FailurePolicy, TourConfig};
use tour_lesson::{compile_document, CompiledLesson, HtmlRenderer, RenderTemplate, Renderer};
use tour_present::FsCodeLoader;
use tour_source::{discover_lessons, LessonPath, SourceFile};

use crate::cache::LessonCache;
use crate::error::{InitError, LessonError};

/// Settings for a cache build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Lesson file extension, without the leading dot.
    pub extension: String,
    /// Compile lessons on the rayon thread pool.
    pub parallel: bool,
    /// What to do when a lesson fails to compile.
    pub policy: FailurePolicy,
    /// Template for the built-in HTML renderer.
    pub template: RenderTemplate,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            extension: "article".to_string(),
            parallel: false,
            policy: FailurePolicy::Abort,
            template: RenderTemplate::default(),
        }
    }
}

impl BuildOptions {
    /// Derives build options from a project configuration.
    pub fn from_config(config: &TourConfig) -> Self {
        Self {
            extension: config.tour.extension.clone(),
            parallel: config.build.parallel,
            policy: config.build.on_error,
            template: RenderTemplate {
                play_enabled: config.render.play,
            },
        }
    }
}

/// A lesson left out of the cache under [`FailurePolicy::Skip`].
#[derive(Debug)]
pub struct SkippedLesson {
    /// The lesson's id.
    pub id: LessonId,
    /// Why it failed to compile.
    pub error: LessonError,
}

/// Outcome of a successful cache build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Ids of the lessons that were compiled and cached, sorted.
    pub compiled: Vec<LessonId>,
    /// Lessons that failed and were skipped. Always empty under
    /// [`FailurePolicy::Abort`].
    pub skipped: Vec<SkippedLesson>,
}

/// Reads, parses and compiles a single lesson file.
///
/// `.code` and `.play` paths are resolved relative to the lesson file's
/// directory.
pub fn compile_lesson_file(
    path: &Path,
    renderer: &dyn Renderer,
) -> Result<CompiledLesson, LessonError> {
    let source = SourceFile::load(path).map_err(|source| LessonError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let loader = FsCodeLoader::new(source.dir());
    let doc = tour_present::parse_file(&source, &loader)?;
    let compiled = compile_document(&doc, renderer)?;
    tracing::debug!(
        path = %path.display(),
        source = %source.fingerprint,
        "compiled lesson file"
    );
    Ok(compiled)
}

/// Builds the lesson cache for every lesson file in `dir`.
///
/// Under [`FailurePolicy::Abort`] the first failing lesson (in id order)
/// fails the whole build and no cache is returned.
pub fn build_cache(dir: &Path, options: &BuildOptions) -> Result<LessonCache, InitError> {
    build_cache_with_report(dir, options).map(|(cache, _)| cache)
}

/// Like [`build_cache`], also returning which lessons were compiled or skipped.
pub fn build_cache_with_report(
    dir: &Path,
    options: &BuildOptions,
) -> Result<(LessonCache, BuildReport), InitError> {
    let renderer = HtmlRenderer::new(options.template);
    build_cache_with_renderer(dir, options, &renderer)
}

/// Builds the cache using a caller-supplied renderer.
///
/// Each lesson compiles into a private result. The cache is assembled only
/// after every compilation has finished, so a failure never leaves a
/// partially populated cache behind.
pub fn build_cache_with_renderer(
    dir: &Path,
    options: &BuildOptions,
    renderer: &dyn Renderer,
) -> Result<(LessonCache, BuildReport), InitError> {
    let lessons = discover_lessons(dir, &options.extension).map_err(|source| {
        InitError::Discover {
            dir: dir.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(
        dir = %dir.display(),
        count = lessons.len(),
        parallel = options.parallel,
        "discovered lessons"
    );

    let compile_one = |lesson: &LessonPath| {
        (
            lesson.id.clone(),
            compile_lesson_file(&lesson.path, renderer),
        )
    };
    // Sequential builds stop at the first failure under Abort; parallel
    // builds finish every lesson first and then report in id order.
    let (cache, report) = if options.parallel {
        let results: Vec<_> = lessons.par_iter().map(compile_one).collect();
        assemble(results, options.policy)?
    } else {
        assemble(lessons.iter().map(compile_one), options.policy)?
    };

    tracing::info!(
        dir = %dir.display(),
        lessons = cache.len(),
        skipped = report.skipped.len(),
        "lesson cache built"
    );
    Ok((cache, report))
}

/// Merges per-lesson results into a cache according to `policy`.
fn assemble(
    results: impl IntoIterator<Item = (LessonId, Result<CompiledLesson, LessonError>)>,
    policy: FailurePolicy,
) -> Result<(LessonCache, BuildReport), InitError> {
    let mut compiled = Vec::new();
    let mut report = BuildReport::default();
    for (id, result) in results {
        match result {
            Ok(lesson) => compiled.push((id, lesson)),
            Err(error) => match policy {
                FailurePolicy::Abort => {
                    return Err(InitError::Lesson { id, source: error });
                }
                FailurePolicy::Skip => {
                    tracing::warn!(lesson = %id, %error, "skipping lesson that failed to compile");
                    report.skipped.push(SkippedLesson { id, error });
                }
            },
        }
    }
    report.compiled = compiled.iter().map(|(id, _)| id.clone()).collect();
    Ok((compiled.into_iter().collect(), report))
}
