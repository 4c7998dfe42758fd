//! Rendering of a section into the HTML shown on a lesson page.

use std::fmt::{self, Write};
use tour_present::{CodeBlock, Node, Section, TextBlock};

/// Errors produced while rendering a section.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to the output buffer failed.
    #[error("formatting failed")]
    Format(#[from] fmt::Error),

    /// The renderer could not handle the section.
    #[error("{reason}")]
    Failed {
        /// Description of the failure.
        reason: String,
    },
}

/// Turns a section into displayable markup.
///
/// Implementations must be shareable across threads because lessons may be
/// compiled in parallel.
pub trait Renderer: Send + Sync {
    /// Appends the markup for `section` to `out`.
    fn render(&self, section: &Section, out: &mut String) -> Result<(), RenderError>;
}

/// Settings that control how sections are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTemplate {
    /// When set, runnable code is left out of the page markup because the
    /// client shows it in an editor fed from the page's `files`. When unset
    /// it is rendered inline like `.code` blocks.
    pub play_enabled: bool,
}

impl Default for RenderTemplate {
    fn default() -> Self {
        Self { play_enabled: true }
    }
}

/// The built-in HTML renderer.
///
/// The top-level section title is not emitted (it is carried separately as
/// the page title). Nested sections get `<h3>`, `<h4>` and so on.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    template: RenderTemplate,
}

impl HtmlRenderer {
    /// Creates a renderer using `template`.
    pub fn new(template: RenderTemplate) -> Self {
        Self { template }
    }

    /// Returns the template this renderer was built with.
    pub fn template(&self) -> RenderTemplate {
        self.template
    }

    fn render_elems(&self, elems: &[Node], out: &mut String) -> Result<(), RenderError> {
        for elem in elems {
            match elem {
                Node::Text(text) => render_text(text, out)?,
                Node::Code(code) => self.render_code(code, out)?,
                Node::Section(section) => {
                    let level = (section.level() + 1).min(6);
                    writeln!(out, "<h{level}>{}</h{level}>", escape(&section.title))?;
                    self.render_elems(&section.elems, out)?;
                }
            }
        }
        Ok(())
    }

    fn render_code(&self, code: &CodeBlock, out: &mut String) -> Result<(), RenderError> {
        if code.play && self.template.play_enabled {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&code.raw);
        writeln!(out, "<div class=\"code\"><pre>{}</pre></div>", escape(&text))?;
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, section: &Section, out: &mut String) -> Result<(), RenderError> {
        self.render_elems(&section.elems, out)
    }
}

fn render_text(text: &TextBlock, out: &mut String) -> Result<(), RenderError> {
    let body = escape(&text.lines.join("\n"));
    if text.pre {
        writeln!(out, "<pre>{body}</pre>")?;
    } else {
        writeln!(out, "<p>\n{body}\n</p>")?;
    }
    Ok(())
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
