//! Lesson compilation: render, extract, fingerprint, encode.

use std::fmt;

use tour_present::{Document, Section};

use crate::error::CompileError;
use crate::extract::extract_play_code;
use crate::model::{CodeFile, Lesson, Page};
use crate::render::Renderer;

/// The canonical JSON encoding of a [`Lesson`].
///
/// The bytes are produced once and never modified. They are always a single
/// self-contained JSON object, so they can be embedded verbatim in larger
/// JSON documents.
#[derive(Clone, PartialEq, Eq)]
pub struct CompiledLesson {
    bytes: Box<[u8]>,
    pages: usize,
    files: usize,
}

impl CompiledLesson {
    /// Encodes a lesson.
    pub fn encode(lesson: &Lesson) -> Result<Self, CompileError> {
        let bytes = serde_json::to_vec(lesson).map_err(CompileError::Encode)?;
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            pages: lesson.pages.len(),
            files: lesson.pages.iter().map(|p| p.files.len()).sum(),
        })
    }

    /// Returns the encoded JSON bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of pages in the lesson.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Returns the number of runnable code files across all pages.
    pub fn file_count(&self) -> usize {
        self.files
    }
}

impl fmt::Debug for CompiledLesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledLesson")
            .field("bytes", &self.bytes.len())
            .field("pages", &self.pages)
            .field("files", &self.files)
            .finish()
    }
}

/// Assembles a [`Lesson`] from top-level sections.
///
/// Each section becomes a page: its rendered markup, and its runnable code
/// files in pre-order. The first render failure aborts the whole lesson.
pub fn build_lesson(
    sections: &[Section],
    title: &str,
    subtitle: &str,
    renderer: &dyn Renderer,
) -> Result<Lesson, CompileError> {
    let mut pages = Vec::with_capacity(sections.len());
    for section in sections {
        let mut content = String::new();
        renderer
            .render(section, &mut content)
            .map_err(|source| CompileError::Render {
                title: section.title.clone(),
                source,
            })?;
        let files = extract_play_code(section)
            .into_iter()
            .map(CodeFile::from_block)
            .collect();
        pages.push(Page {
            title: section.title.clone(),
            content,
            files,
        });
    }
    Ok(Lesson {
        title: title.to_string(),
        description: subtitle.to_string(),
        pages,
    })
}

/// Compiles top-level sections into canonical lesson JSON.
pub fn compile(
    sections: &[Section],
    title: &str,
    subtitle: &str,
    renderer: &dyn Renderer,
) -> Result<CompiledLesson, CompileError> {
    let lesson = build_lesson(sections, title, subtitle, renderer)?;
    let compiled = CompiledLesson::encode(&lesson)?;
    tracing::debug!(
        title,
        pages = compiled.page_count(),
        files = compiled.file_count(),
        bytes = compiled.as_bytes().len(),
        "compiled lesson"
    );
    Ok(compiled)
}

/// Compiles a parsed document using its title and subtitle.
pub fn compile_document(
    doc: &Document,
    renderer: &dyn Renderer,
) -> Result<CompiledLesson, CompileError> {
    compile(&doc.sections, &doc.title, &doc.subtitle, renderer)
}
