//! Conversion from raw trees to trees with parsed attributes.

use laxml_parse::{ArgMap, RawElement, RawNode, parse_arg_string};

use crate::{Element, Node};

/// An element being converted, with the raw children not yet visited.
struct Pending {
    name: String,
    args: ArgMap,
    remaining: std::vec::IntoIter<RawNode>,
    done: Vec<Node>,
}

impl Pending {
    fn new(mut raw: RawElement) -> Self {
        Self {
            args: parse_arg_string(&raw.arg_string),
            name: std::mem::take(&mut raw.name),
            remaining: std::mem::take(&mut raw.children).into_iter(),
            done: Vec::new(),
        }
    }

    fn into_element(self) -> Element {
        Element::new(self.name, self.args, self.done)
    }
}

/// Parse the attributes of `raw` and of every element below it.
///
/// The shape of the tree is unchanged and text runs pass through as-is. Works with
/// an explicit stack, so nesting depth is not limited by the call stack.
pub fn materialize(raw: RawElement) -> Element {
    let mut root = Pending::new(raw);
    let mut open: Vec<Pending> = Vec::new();
    loop {
        let top = open.last_mut().unwrap_or(&mut root);
        match top.remaining.next() {
            Some(RawNode::Text(text)) => top.done.push(Node::Text(text)),
            Some(RawNode::Element(child)) => open.push(Pending::new(child)),
            None => match open.pop() {
                Some(finished) => {
                    let parent = open.last_mut().unwrap_or(&mut root);
                    parent.done.push(Node::Element(finished.into_element()));
                }
                None => return root.into_element(),
            },
        }
    }
}

/// [`materialize`] every element in a node list.
pub fn materialize_nodes(nodes: Vec<RawNode>) -> Vec<Node> {
    nodes.into_iter().map(materialize_node).collect()
}

/// [`materialize`] a single node. Text passes through unchanged.
pub fn materialize_node(node: RawNode) -> Node {
    match node {
        RawNode::Element(raw) => Node::Element(materialize(raw)),
        RawNode::Text(text) => Node::Text(text),
    }
}
