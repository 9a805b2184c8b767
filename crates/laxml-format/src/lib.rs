//! Serialization of laxml element trees back into markup.
//!
//! Output parses back to an equal tree as long as no text run contains `<`, no
//! attribute value contains a backslash or `>`, and no raw attribute string ends
//! with `/`. Adjacent text runs come back merged.

use laxml_tree::{Document, Node, RawNode};
use tracing::debug;

mod escape;
mod options;
mod writer;

pub use escape::escape_arg_value;
pub use options::FormatOptions;
pub use writer::MarkupWriter;

/// A node that can be written with a [`MarkupWriter`].
trait WriteMarkup: Sized {
    /// Write the node, or for elements only its open tag, returning the children.
    fn write_open(&self, w: &mut MarkupWriter) -> Option<&[Self]>;
}

impl WriteMarkup for Node {
    fn write_open(&self, w: &mut MarkupWriter) -> Option<&[Self]> {
        match self {
            Node::Element(element) => {
                let args = element.args.iter().map(|(k, v)| (k.as_str(), v.as_str()));
                w.begin_element(&element.name, args);
                Some(element.children.as_slice())
            }
            Node::Text(text) => {
                w.write_text(text);
                None
            }
        }
    }
}

impl WriteMarkup for RawNode {
    fn write_open(&self, w: &mut MarkupWriter) -> Option<&[Self]> {
        match self {
            RawNode::Element(element) => {
                w.begin_element_raw(&element.name, &element.arg_string);
                Some(element.children.as_slice())
            }
            RawNode::Text(text) => {
                w.write_text(text);
                None
            }
        }
    }
}

enum Step<'a, N> {
    Node(&'a N),
    End,
}

/// Walk the nodes with an explicit stack, so deep trees do not grow the call stack.
fn write_nodes<N: WriteMarkup>(w: &mut MarkupWriter, nodes: &[N]) {
    let mut pending: Vec<Step<'_, N>> = nodes.iter().rev().map(Step::Node).collect();
    while let Some(step) = pending.pop() {
        match step {
            Step::Node(node) => {
                if let Some(children) = node.write_open(w) {
                    pending.push(Step::End);
                    pending.extend(children.iter().rev().map(Step::Node));
                }
            }
            Step::End => {
                let closed = w.end_element();
                debug_assert!(closed.is_ok());
            }
        }
    }
}

/// Format nodes with parsed attributes as markup.
pub fn format_nodes(nodes: &[Node], options: &FormatOptions) -> String {
    debug!(roots = nodes.len(), pretty = options.pretty, "formatting nodes");
    let mut w = MarkupWriter::with_options(options.clone());
    write_nodes(&mut w, nodes);
    w.finish()
}

/// Format raw nodes as markup, writing each attribute string verbatim.
pub fn format_raw_nodes(nodes: &[RawNode], options: &FormatOptions) -> String {
    debug!(roots = nodes.len(), pretty = options.pretty, "formatting raw nodes");
    let mut w = MarkupWriter::with_options(options.clone());
    write_nodes(&mut w, nodes);
    w.finish()
}

/// Format a document as markup.
pub fn format_document(document: &Document, options: &FormatOptions) -> String {
    format_nodes(&document.nodes, options)
}

/// Render a single node as compact markup.
pub fn to_markup(node: &Node) -> String {
    format_nodes(std::slice::from_ref(node), &FormatOptions::default())
}
