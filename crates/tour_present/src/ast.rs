//! Document tree produced by the present-format parser.

use serde::Serialize;
use std::collections::BTreeMap;

/// A parsed lesson document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// The first line of the document.
    pub title: String,
    /// The second line of the document, or empty if it was blank.
    pub subtitle: String,
    /// `Key: value` lines from the header block.
    pub metadata: BTreeMap<String, String>,
    /// Lines of the author block between the header and the first section.
    pub authors: Vec<String>,
    /// Top-level sections in source order.
    pub sections: Vec<Section>,
}

/// A titled section. Top-level sections become lesson pages; nested
/// sections appear as [`Node::Section`] children of their parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Hierarchical section number, e.g. `[2, 1]` for the first subsection
    /// of the second top-level section.
    pub number: Vec<u32>,
    /// The heading text.
    pub title: String,
    /// Child nodes in source order.
    pub elems: Vec<Node>,
}

impl Section {
    /// Returns the nesting depth of this section (1 for top-level).
    pub fn level(&self) -> usize {
        self.number.len()
    }
}

/// A node of the document tree.
///
/// This is a closed set: consumers match it exhaustively so that a new
/// kind of node shows up as a compile error rather than being ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// A paragraph or preformatted block of text.
    Text(TextBlock),
    /// A code file embedded with `.code` or `.play`.
    Code(CodeBlock),
    /// A nested section.
    Section(Section),
}

/// A run of consecutive text lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    /// The lines of the block. Preformatted lines have their common
    /// indentation removed.
    pub lines: Vec<String>,
    /// Whether the block was indented in the source.
    pub pre: bool,
}

/// A code file embedded in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    /// The file name shown to the reader (the last component of the path).
    pub file_name: String,
    /// The file's bytes with `OMIT` lines removed.
    pub raw: Vec<u8>,
    /// Whether the block was declared with `.play` and may be run.
    pub play: bool,
    /// Flags given on the directive, e.g. `-edit` or `-numbers`.
    pub flags: Vec<String>,
    /// 1-indexed source line of the directive.
    pub line: u32,
}
