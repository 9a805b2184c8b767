//! Tree builder: turns a token stream into nested raw elements.

use laxml_tokenizer::{Span, Token, Tokenizer};
use tracing::{debug, trace};

use crate::{RawElement, RawNode, Recovery, RecoveryKind};


/// An element whose close tag has not been seen yet.
struct Frame<'src> {
    name: &'src str,
    arg_string: &'src str,
    /// Span of the open tag.
    span: Span,
    children: Vec<RawNode>,
}

impl Frame<'_> {
    fn into_element(self) -> RawElement {
        RawElement::new(self.name, self.arg_string, self.children)
    }
}

/// Builds a raw element tree from markup in a single forward pass.
///
/// Open elements are kept on an explicit stack, so arbitrarily deep nesting does not
/// grow the call stack. A close tag only ends the innermost open element, and only if
/// the names match; every other close tag is dropped. Top-level text is dropped.
/// Elements still open at end of input are closed with whatever children they have.
///
/// A `<` that does not start a tag begins a new text run, so an element can end up
/// with adjacent text children: `<a>1 < 2</a>` gives `"1"` and `"< 2"`.
pub struct TreeBuilder<'src> {
    tokens: Tokenizer<'src>,
    stack: Vec<Frame<'src>>,
    roots: Vec<RawNode>,
    recoveries: Vec<Recovery>,
}

impl<'src> TreeBuilder<'src> {
    /// Create a new tree builder for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            stack: Vec::new(),
            roots: Vec::new(),
            recoveries: Vec::new(),
        }
    }

    /// Consume the whole input and return the root nodes along with every recovery
    /// made on the way, in source order (unclosed elements last, innermost first).
    pub fn finish(mut self) -> (Vec<RawNode>, Vec<Recovery>) {
        while let Some(token) = self.tokens.next_token() {
            self.token(token);
        }

        while let Some(frame) = self.stack.pop() {
            self.recover(
                RecoveryKind::UnclosedElement {
                    name: frame.name.to_string(),
                },
                frame.span,
            );
            self.push_node(RawNode::Element(frame.into_element()));
        }

        (self.roots, self.recoveries)
    }

    fn token(&mut self, token: Token<'src>) {
        match token {
            Token::Open {
                name,
                arg_string,
                span,
            } => {
                trace!(name, depth = self.stack.len(), "open element");
                self.stack.push(Frame {
                    name,
                    arg_string,
                    span,
                    children: Vec::new(),
                });
            }
            Token::SelfClosing {
                name, arg_string, ..
            } => {
                trace!(name, depth = self.stack.len(), "self-closing element");
                self.push_node(RawNode::Element(RawElement::new(name, arg_string, Vec::new())));
            }
            Token::Close { name, span } => self.close(name, span),
            Token::Text { text, span } => self.text(text, span),
        }
    }

    fn close(&mut self, name: &str, span: Span) {
        let Some(open) = self.stack.last() else {
            self.recover(
                RecoveryKind::StrayCloseTag {
                    name: name.to_string(),
                },
                span,
            );
            return;
        };

        if open.name != name {
            let expected = open.name.to_string();
            self.recover(
                RecoveryKind::MismatchedCloseTag {
                    name: name.to_string(),
                    expected,
                },
                span,
            );
            return;
        }

        if let Some(frame) = self.stack.pop() {
            trace!(name, depth = self.stack.len(), "close element");
            self.push_node(RawNode::Element(frame.into_element()));
        }
    }

    fn text(&mut self, text: &str, span: Span) {
        // Top-level text is dropped anyway, and recorded as such below.
        if text.starts_with('<') && !self.stack.is_empty() {
            self.recover(
                RecoveryKind::StrayAngleBracket,
                Span::new(span.start, span.start + 1),
            );
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        match self.stack.last_mut() {
            Some(frame) => frame.children.push(RawNode::Text(trimmed.to_string())),
            None => self.recover(RecoveryKind::DiscardedText, span.trimmed(text)),
        }
    }

    /// Append a finished node to the innermost open element, or to the roots.
    fn push_node(&mut self, node: RawNode) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn recover(&mut self, kind: RecoveryKind, span: Span) {
        debug!("recovered from malformed markup: {} at {:?}", kind, span);
        self.recoveries.push(Recovery::new(kind, span));
    }
}

/// Parse markup into raw elements, keeping each element's attribute text unparsed.
///
/// Never fails; see [`TreeBuilder`] for how malformed input is handled.
pub fn parse_xml_keep_arg_strings(source: &str) -> Vec<RawNode> {
    TreeBuilder::new(source).finish().0
}

/// Like [`parse_xml_keep_arg_strings`], also returning what had to be recovered from.
pub fn parse_with_recoveries(source: &str) -> (Vec<RawNode>, Vec<Recovery>) {
    TreeBuilder::new(source).finish()
}
