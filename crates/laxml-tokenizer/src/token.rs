//! Token types for the laxml tokenizer.

use crate::Span;

/// The kind of a token, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<name args>`
    Open,
    /// `<name args/>`
    SelfClosing,
    /// `</name>`
    Close,
    /// Anything up to the next `<`
    Text,
}

/// A token borrowed from the source text.
///
/// Each variant carries only the fields that make sense for it. Tag names and
/// argument strings are slices of the source; `arg_string` is already trimmed and,
/// for self-closing tags, has the trailing `/` removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// An opening tag.
    Open {
        /// Tag name.
        name: &'src str,
        /// Raw attribute text between the name and `>`.
        arg_string: &'src str,
        /// The whole tag, `<` through `>`.
        span: Span,
    },
    /// A self-closing tag.
    SelfClosing {
        /// Tag name.
        name: &'src str,
        /// Raw attribute text between the name and `/>`.
        arg_string: &'src str,
        /// The whole tag, `<` through `>`.
        span: Span,
    },
    /// A closing tag.
    Close {
        /// Tag name.
        name: &'src str,
        /// The whole tag, `</` through `>`.
        span: Span,
    },
    /// A run of text, untrimmed. May begin with a `<` that did not start a tag.
    Text {
        /// The source text of the run.
        text: &'src str,
        /// Location of the run.
        span: Span,
    },
}

impl<'src> Token<'src> {
    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Open { .. } => TokenKind::Open,
            Token::SelfClosing { .. } => TokenKind::SelfClosing,
            Token::Close { .. } => TokenKind::Close,
            Token::Text { .. } => TokenKind::Text,
        }
    }

    /// The source span covered by this token.
    pub fn span(&self) -> Span {
        match self {
            Token::Open { span, .. }
            | Token::SelfClosing { span, .. }
            | Token::Close { span, .. }
            | Token::Text { span, .. } => *span,
        }
    }

    /// The tag name, if this token is a tag.
    pub fn name(&self) -> Option<&'src str> {
        match self {
            Token::Open { name, .. } | Token::SelfClosing { name, .. } | Token::Close { name, .. } => {
                Some(*name)
            }
            Token::Text { .. } => None,
        }
    }

    /// Whether this token is a tag rather than text.
    pub fn is_tag(&self) -> bool {
        !matches!(self, Token::Text { .. })
    }
}
