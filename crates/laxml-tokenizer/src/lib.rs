//! A tokenizer for lenient XML-like markup.
//!
//! Recognizes open, self-closing and close tags anchored at a byte offset, and
//! splits whole documents into tags and text runs.

mod span;
pub use span::Span;

mod token;
pub use token::{Token, TokenKind};

mod tokenizer;
pub use tokenizer::{Tokenizer, scan_tag};
