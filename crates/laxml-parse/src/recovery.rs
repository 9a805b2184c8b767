//! Records of malformed input the tree builder recovered from.

use std::fmt;

use laxml_tokenizer::Span;

/// Something the tree builder had to skip or repair.
///
/// Recoveries never change the tree that is produced; they only describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// What happened.
    pub kind: RecoveryKind,
    /// Where it happened.
    pub span: Span,
}

impl Recovery {
    /// Create a new recovery record.
    pub fn new(kind: RecoveryKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Kind of recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryKind {
    /// A close tag outside of any element. It was dropped.
    StrayCloseTag {
        /// Name in the close tag.
        name: String,
    },
    /// A close tag inside an element with a different name. It was dropped.
    MismatchedCloseTag {
        /// Name in the close tag.
        name: String,
        /// Name of the innermost open element.
        expected: String,
    },
    /// Input ended before the element was closed. Its children so far were kept.
    UnclosedElement {
        /// Name of the element.
        name: String,
    },
    /// Non-blank text outside of any element. It was dropped.
    DiscardedText,
    /// A `<` that does not begin a tag. It was kept as text.
    StrayAngleBracket,
}

impl fmt::Display for RecoveryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryKind::StrayCloseTag { name } => write!(f, "stray close tag `</{}>`", name),
            RecoveryKind::MismatchedCloseTag { name, expected } => {
                write!(f, "close tag `</{}>` does not match open element `<{}>`", name, expected)
            }
            RecoveryKind::UnclosedElement { name } => write!(f, "unclosed element `<{}>`", name),
            RecoveryKind::DiscardedText => write!(f, "text outside of any element"),
            RecoveryKind::StrayAngleBracket => write!(f, "`<` does not start a tag"),
        }
    }
}
