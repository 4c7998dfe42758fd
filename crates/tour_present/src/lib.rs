//! Parser for the present lesson markup format.
//!
//! The main entry point is [`parse_file`], which turns a [`SourceFile`] into a
//! [`Document`]: a title, a subtitle and a tree of [`Section`]s holding text,
//! embedded code, and nested sections.
//!
//! # Architecture
//!
//! - **AST** ([`ast`]): the document tree. [`Node`] is a closed enum.
//! - **Parser** ([`parser`]): a single forward pass over the lines of the file.
//! - **Loader** ([`loader`]): resolves and reads the code files named by
//!   `.code` and `.play` directives.

#![warn(missing_docs)]

pub mod ast;
pub mod error;
pub mod loader;
pub mod parser;

pub use ast::{CodeBlock, Document, Node, Section, TextBlock};
pub use error::ParseError;
pub use loader::{CodeLoader, FsCodeLoader, MapCodeLoader};
pub use parser::PresentParser;

use tour_source::SourceFile;

/// Parses a lesson source file into a document tree.
///
/// Code files referenced by `.code` and `.play` are read through `loader`.
pub fn parse_file(source: &SourceFile, loader: &dyn CodeLoader) -> Result<Document, ParseError> {
    PresentParser::new(source, loader).parse_document()
}

/// Parses lesson text held in memory. `name` is used as the file path.
pub fn parse_str(name: &str, text: &str, loader: &dyn CodeLoader) -> Result<Document, ParseError> {
    let source = SourceFile::new(name, text.to_string());
    parse_file(&source, loader)
}
