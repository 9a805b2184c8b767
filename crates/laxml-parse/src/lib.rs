//! Lenient parser for XML-like markup.
//!
//! [`parse_xml_keep_arg_strings`] builds a tree of [`RawElement`]s whose attributes are
//! kept as the raw text from each tag; [`parse_arg_string`] turns that text into an
//! [`ArgMap`]. Neither ever fails: malformed markup degrades into skipped tags or plain
//! text, and [`parse_with_recoveries`] reports what was skipped.

pub use laxml_tokenizer::{Span, Token, TokenKind, Tokenizer};

mod args;
pub use args::{ArgMap, parse_arg_string, unescape_arg_value};

mod builder;
pub use builder::{TreeBuilder, parse_with_recoveries, parse_xml_keep_arg_strings};

mod raw;
pub use raw::{RawElement, RawNode};

mod recovery;
pub use recovery::{Recovery, RecoveryKind};
