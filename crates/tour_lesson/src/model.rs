//! The compiled lesson structure served to clients.
//!
//! Field declaration order is the JSON key order. Cached lesson bytes are
//! spliced into aggregate responses without re-encoding, so these types must
//! serialize the same way on every run.

use serde::{Deserialize, Serialize};
use tour_common::Fingerprint;
use tour_present::CodeBlock;

/// A compiled tutorial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// The document title.
    pub title: String,
    /// The document subtitle.
    pub description: String,
    /// One page per top-level section, in source order.
    pub pages: Vec<Page>,
}

/// One slide of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// The section title.
    pub title: String,
    /// The rendered HTML of the section.
    pub content: String,
    /// Runnable code files of the section in pre-order walk order.
    pub files: Vec<CodeFile>,
}

/// A runnable code file attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeFile {
    /// The file name, e.g. `main.go`.
    pub name: String,
    /// The raw source text.
    pub content: String,
    /// Fingerprint of the raw bytes.
    pub hash: String,
}

impl CodeFile {
    /// Builds a code file from a parsed code block.
    ///
    /// The fingerprint is taken over the raw bytes. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD in `content` only.
    pub fn from_block(block: &CodeBlock) -> Self {
        Self {
            name: block.file_name.clone(),
            content: String::from_utf8_lossy(&block.raw).into_owned(),
            hash: Fingerprint::from_bytes(&block.raw).to_token(),
        }
    }
}
