//! Collection of runnable code from a section tree.

use tour_present::{CodeBlock, Node, Section};

/// Returns the runnable code blocks of a section in depth-first pre-order.
///
/// Nested sections are expanded in place, so the result is flat. Text and
/// `.code` blocks are skipped.
pub fn extract_play_code(section: &Section) -> Vec<&CodeBlock> {
    section.elems.iter().flat_map(find_play_code).collect()
}

/// Returns the runnable code blocks reachable from a single node.
pub fn find_play_code(node: &Node) -> Vec<&CodeBlock> {
    let mut found = Vec::new();
    collect(node, &mut found);
    found
}

fn collect<'a>(node: &'a Node, found: &mut Vec<&'a CodeBlock>) {
    match node {
        Node::Code(code) => {
            if code.play {
                found.push(code);
            }
        }
        Node::Section(section) => {
            for child in &section.elems {
                collect(child, found);
            }
        }
        Node::Text(_) => {}
    }
}
