//! Tree types that keep each element's attribute text unparsed.

/// An element whose attributes are still the raw text from its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement {
    /// Tag name.
    pub name: String,
    /// Trimmed text between the tag name and `>` (or `/>`).
    pub arg_string: String,
    /// Nested elements and trimmed, non-empty text runs, in document order.
    pub children: Vec<RawNode>,
}

impl RawElement {
    /// Create a new raw element.
    pub fn new(
        name: impl Into<String>,
        arg_string: impl Into<String>,
        children: Vec<RawNode>,
    ) -> Self {
        Self {
            name: name.into(),
            arg_string: arg_string.into(),
            children,
        }
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &RawElement> {
        self.children.iter().filter_map(RawNode::as_element)
    }

    /// Child text runs, skipping elements.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(RawNode::as_text)
    }
}

// Nesting depth is unbounded, so children are released with a work list rather than
// by the recursive drop glue.
impl Drop for RawElement {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let RawNode::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// A child of a raw element, or a root of a raw document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    /// A nested element.
    Element(RawElement),
    /// A text run.
    Text(String),
}

impl RawNode {
    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&RawElement> {
        match self {
            RawNode::Element(element) => Some(element),
            RawNode::Text(_) => None,
        }
    }

    /// The text, if this node is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawNode::Text(text) => Some(text),
            RawNode::Element(_) => None,
        }
    }
}

impl From<RawElement> for RawNode {
    fn from(element: RawElement) -> Self {
        RawNode::Element(element)
    }
}

impl From<String> for RawNode {
    fn from(text: String) -> Self {
        RawNode::Text(text)
    }
}

impl From<&str> for RawNode {
    fn from(text: &str) -> Self {
        RawNode::Text(text.to_string())
    }
}
