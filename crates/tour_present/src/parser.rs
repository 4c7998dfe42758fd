//! Line-oriented parser for the present lesson format.
//!
//! A document looks like this:
//!
//! ```text
//! Packages, variables, and functions.
//! Learn the basic components of any Go program.
//! Tags: basics
//!
//! The Go Authors
//! https://go.dev
//!
//! * Packages
//!
//! Every Go program is made up of packages.
//!
//! .play basics/packages.go
//!
//! ** Imports
//!
//!   import "fmt"
//! ```
//!
//! The first line is the title and the second the subtitle. The header runs
//! to the first blank line, then comes an author block, then sections.

use crate::ast::{CodeBlock, Document, Node, Section, TextBlock};
use crate::error::ParseError;
use crate::loader::CodeLoader;
use std::collections::BTreeMap;
use std::path::Path;
use tour_source::SourceFile;

/// Parser state for a single document.
pub struct PresentParser<'a> {
    loader: &'a dyn CodeLoader,
    lines: Vec<&'a str>,
    /// Index of the next unread line.
    pos: usize,
    /// Sections whose headings have been seen but whose bodies are still open,
    /// outermost first.
    open: Vec<Section>,
    /// Completed top-level sections.
    sections: Vec<Section>,
    pending: Vec<&'a str>,
    pending_pre: bool,
    pending_line: u32,
}

impl<'a> PresentParser<'a> {
    /// Creates a parser over a source file, loading code through `loader`.
    pub fn new(source: &'a SourceFile, loader: &'a dyn CodeLoader) -> Self {
        let lines = source.lines().collect();
        Self {
            loader,
            lines,
            pos: 0,
            open: Vec::new(),
            sections: Vec::new(),
            pending: Vec::new(),
            pending_pre: false,
            pending_line: 0,
        }
    }

    /// Parses the whole document.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        let title = match self.next_line() {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => return Err(ParseError::MissingTitle),
        };

        let mut subtitle = String::new();
        if let Some(line) = self.peek() {
            let is_header = heading(line).is_some() || metadata_entry(line).is_some();
            if !line.trim().is_empty() && !is_header {
                subtitle = line.trim().to_string();
                self.pos += 1;
            }
        }

        let metadata = self.parse_header();
        let authors = self.parse_authors()?;

        while let Some(line) = self.next_line() {
            let lineno = self.pos as u32;
            if let Some((level, title)) = heading(line) {
                self.flush_text()?;
                self.open_section(level, title, lineno)?;
            } else if line.trim().is_empty() {
                self.flush_text()?;
            } else if line.starts_with('.') {
                self.flush_text()?;
                let code = self.parse_directive(line, lineno)?;
                self.push_node(Node::Code(code), lineno, line)?;
            } else {
                let pre = line.starts_with(' ') || line.starts_with('\t');
                if !self.pending.is_empty() && pre != self.pending_pre {
                    self.flush_text()?;
                }
                if self.pending.is_empty() {
                    self.pending_pre = pre;
                    self.pending_line = lineno;
                }
                self.pending.push(line);
            }
        }
        self.flush_text()?;
        self.close_sections(0);

        Ok(Document {
            title,
            subtitle,
            metadata,
            authors,
            sections: self.sections,
        })
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consumes header lines up to the first blank line or heading,
    /// collecting `Key: value` pairs.
    fn parse_header(&mut self) -> BTreeMap<String, String> {
        let mut metadata = BTreeMap::new();
        while let Some(line) = self.peek() {
            if line.trim().is_empty() || heading(line).is_some() {
                break;
            }
            if let Some((key, value)) = metadata_entry(line) {
                metadata.insert(key.to_string(), value.to_string());
            }
            self.pos += 1;
        }
        metadata
    }

    /// Consumes the author block, which ends at the first heading.
    fn parse_authors(&mut self) -> Result<Vec<String>, ParseError> {
        let mut authors = Vec::new();
        while let Some(line) = self.peek() {
            if heading(line).is_some() {
                break;
            }
            self.pos += 1;
            let trimmed = line.trim();
            if trimmed.starts_with('.') {
                return Err(ParseError::ContentOutsideSection {
                    line: self.pos as u32,
                    text: trimmed.to_string(),
                });
            }
            if !trimmed.is_empty() {
                authors.push(trimmed.to_string());
            }
        }
        Ok(authors)
    }

    fn open_section(&mut self, level: usize, title: &str, line: u32) -> Result<(), ParseError> {
        let current = self.open.len();
        if level > current + 1 {
            return Err(ParseError::SkippedSectionLevel {
                line,
                current,
                found: level,
            });
        }
        self.close_sections(level - 1);

        let number = match self.open.last() {
            Some(parent) => {
                let siblings = parent
                    .elems
                    .iter()
                    .filter(|e| matches!(e, Node::Section(_)))
                    .count();
                let mut number = parent.number.clone();
                number.push(siblings as u32 + 1);
                number
            }
            None => vec![self.sections.len() as u32 + 1],
        };
        self.open.push(Section {
            number,
            title: title.to_string(),
            elems: Vec::new(),
        });
        Ok(())
    }

    /// Closes open sections until only `depth` remain, attaching each to
    /// its parent or to the document.
    fn close_sections(&mut self, depth: usize) {
        while self.open.len() > depth {
            let Some(section) = self.open.pop() else {
                break;
            };
            match self.open.last_mut() {
                Some(parent) => parent.elems.push(Node::Section(section)),
                None => self.sections.push(section),
            }
        }
    }

    fn push_node(&mut self, node: Node, line: u32, text: &str) -> Result<(), ParseError> {
        match self.open.last_mut() {
            Some(section) => {
                section.elems.push(node);
                Ok(())
            }
            None => Err(ParseError::ContentOutsideSection {
                line,
                text: text.trim().to_string(),
            }),
        }
    }

    fn flush_text(&mut self) -> Result<(), ParseError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let lines = std::mem::take(&mut self.pending);
        let first = lines[0];
        let block = text_block(&lines, self.pending_pre);
        self.push_node(Node::Text(block), self.pending_line, first)
    }

    fn parse_directive(&self, text: &str, line: u32) -> Result<CodeBlock, ParseError> {
        let mut words = text.split_whitespace();
        let name = words.next().unwrap_or(text);
        let play = match name {
            ".play" => true,
            ".code" => false,
            _ => {
                return Err(ParseError::UnknownDirective {
                    line,
                    directive: name.to_string(),
                })
            }
        };

        let invalid = |reason: String| ParseError::InvalidDirective {
            line,
            text: text.trim().to_string(),
            reason,
        };

        let mut flags = Vec::new();
        let mut path = None;
        for word in words {
            if path.is_some() {
                return Err(invalid(format!(
                    "unexpected argument '{word}'; line addresses are not supported"
                )));
            }
            if word.starts_with('-') {
                flags.push(word.to_string());
            } else {
                path = Some(word);
            }
        }
        let path = path.ok_or_else(|| invalid("missing file path".to_string()))?;

        let resolved = self.loader.resolve(Path::new(path));
        let raw = self
            .loader
            .read(&resolved)
            .map_err(|source| ParseError::CodeLoad {
                line,
                path: resolved.clone(),
                source,
            })?;
        let file_name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();

        Ok(CodeBlock {
            file_name,
            raw: strip_omit_lines(&raw),
            play,
            flags,
            line,
        })
    }
}

/// Recognizes a section heading: one or more `*` followed by a space.
/// Returns the level and the trimmed title.
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'*').count();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some((level, rest.trim()))
}

/// Recognizes a `Key: value` header line. The key must be a single word.
fn metadata_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((key, value.trim()))
}

fn text_block(lines: &[&str], pre: bool) -> TextBlock {
    let indent = if pre {
        lines
            .iter()
            .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0)
    } else {
        0
    };
    TextBlock {
        lines: lines
            .iter()
            .map(|l| l[indent..].trim_end().to_string())
            .collect(),
        pre,
    }
}

/// Removes every line whose content ends in `OMIT`, keeping all other
/// bytes (including line terminators) untouched.
fn strip_omit_lines(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for line in raw.split_inclusive(|&b| b == b'\n') {
        let end = line
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |i| i + 1);
        if !line[..end].ends_with(b"OMIT") {
            out.extend_from_slice(line);
        }
    }
    out
}
