#![doc = include_str!("../README.md")]
//! Element trees for lenient XML-like markup.
//!
//! This crate turns markup into [`Element`]s with parsed attributes, and offers a
//! strict mode that reports what lenient parsing would have silently repaired.

mod diagnostic;
mod element;
mod materialize;

pub use diagnostic::{ParseError, ParseErrors};
pub use element::{Element, Node};
pub use laxml_parse::{
    ArgMap, RawElement, RawNode, Recovery, RecoveryKind, Span, parse_arg_string,
    parse_xml_keep_arg_strings,
};
pub use materialize::{materialize, materialize_node, materialize_nodes};

/// Parse markup into a list of root nodes with parsed attributes.
///
/// Never fails. Top-level text is dropped, so every root is an element.
pub fn parse_xml(source: &str) -> Vec<Node> {
    materialize_nodes(parse_xml_keep_arg_strings(source))
}

/// A parsed document: the root nodes in source order.
///
/// There is no implicit root element; a document may have any number of roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The root nodes.
    pub nodes: Vec<Node>,
}

impl Document {
    /// Parse a document leniently.
    pub fn parse(source: &str) -> Self {
        Self {
            nodes: parse_xml(source),
        }
    }

    /// Parse a document leniently, also returning every problem that was repaired.
    pub fn parse_with_diagnostics(source: &str) -> (Self, Vec<ParseError>) {
        let (raw, recoveries) = laxml_parse::parse_with_recoveries(source);
        let document = Self {
            nodes: materialize_nodes(raw),
        };
        let errors = recoveries.into_iter().map(ParseError::from).collect();
        (document, errors)
    }

    /// Parse a document, failing if lenient parsing had to repair anything.
    pub fn parse_strict(source: &str) -> Result<Self, ParseErrors> {
        let (document, errors) = Self::parse_with_diagnostics(source);
        match ParseErrors::new(errors) {
            Some(errors) => Err(errors),
            None => Ok(document),
        }
    }

    /// Root elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    /// First element named `name`, depth-first in document order.
    pub fn find(&self, name: &str) -> Option<&Element> {
        element::find_in(&self.nodes, name)
    }

    /// Whether the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
