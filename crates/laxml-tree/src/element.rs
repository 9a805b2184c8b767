//! Element tree with parsed attributes.

use laxml_parse::ArgMap;

/// An element with its attributes parsed into a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes, name to unescaped value.
    pub args: ArgMap,
    /// Nested elements and trimmed, non-empty text runs, in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create a new element.
    pub fn new(name: impl Into<String>, args: ArgMap, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            args,
            children,
        }
    }

    /// Get an attribute value.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Child text runs, skipping elements.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(Node::as_text)
    }

    /// Direct child text runs joined with single spaces.
    pub fn text(&self) -> String {
        self.texts().collect::<Vec<_>>().join(" ")
    }

    /// First descendant element named `name`, depth-first in document order.
    ///
    /// The element itself is not considered.
    pub fn find(&self, name: &str) -> Option<&Element> {
        find_in(&self.children, name)
    }

    /// Whether this element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

// Nesting depth is unbounded, so children are released with a work list rather than
// by the recursive drop glue.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Depth-first pre-order search over a node list.
pub(crate) fn find_in<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Element> {
    let mut pending: Vec<&Element> = nodes.iter().rev().filter_map(Node::as_element).collect();
    while let Some(element) = pending.pop() {
        if element.name == name {
            return Some(element);
        }
        pending.extend(element.children.iter().rev().filter_map(Node::as_element));
    }
    None
}

/// A child of an element, or a root of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// A text run.
    Text(String),
}

impl Node {
    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// The text, if this node is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Whether this node is a text run.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, children: Vec<Node>) -> Element {
        Element::new(name, ArgMap::new(), children)
    }

    #[test]
    fn test_arg() {
        let mut args = ArgMap::new();
        args.insert("id".to_string(), "7".to_string());
        let e = Element::new("item", args, vec![]);
        assert_eq!(e.arg("id"), Some("7"));
        assert_eq!(e.arg("missing"), None);
    }

    #[test]
    fn test_text_joins_direct_runs() {
        let e = element(
            "p",
            vec![
                "Some text".into(),
                element("b", vec!["bold".into()]).into(),
                "more".into(),
            ],
        );
        assert_eq!(e.text(), "Some text more");
        assert_eq!(e.elements().count(), 1);
        assert!(!e.is_empty());
    }

    #[test]
    fn test_find_is_preorder() {
        let tree = element(
            "root",
            vec![
                element("a", vec![element("target", vec!["deep".into()]).into()]).into(),
                element("target", vec!["shallow".into()]).into(),
            ],
        );
        assert_eq!(tree.find("target").map(Element::text), Some("deep".to_string()));
        assert!(tree.find("root").is_none());
        assert!(tree.find("nothing").is_none());
    }
}
