//! Tokenizer for lenient XML-like markup.

use crate::{Span, Token};
use tracing::trace;

/// Try to recognize a tag starting exactly at `offset`.
///
/// Matching is anchored: nothing is skipped to find a tag. Returns `None` when the
/// text at `offset` is not an open, self-closing, or close tag (including when
/// `offset` is out of range or not on a char boundary). The returned token's
/// `span().end` is the offset just past the consumed tag.
pub fn scan_tag(source: &str, offset: usize) -> Option<Token<'_>> {
    let rest = source.get(offset..)?;
    let after_lt = rest.strip_prefix('<')?;

    if let Some(after_slash) = after_lt.strip_prefix('/') {
        return scan_close_tag(source, offset, after_slash);
    }
    scan_open_tag(source, offset, after_lt)
}

/// `<name ...>` or `<name .../>`. `after_lt` is the source just past the `<`.
fn scan_open_tag<'src>(source: &'src str, offset: usize, after_lt: &'src str) -> Option<Token<'src>> {
    let name_len = tag_name_len(after_lt);
    if name_len == 0 {
        return None;
    }
    let name_start = offset + 1;
    let name = &source[name_start..name_start + name_len];

    // Everything up to the next `>` belongs to the tag, newlines and `<` included.
    let args_start = name_start + name_len;
    let gt = source[args_start..].find('>')?;
    let args = source[args_start..args_start + gt].trim();
    let span = Span::new(offset, args_start + gt + 1);

    let token = match args.strip_suffix('/') {
        Some(args) => Token::SelfClosing {
            name,
            arg_string: args.trim(),
            span,
        },
        None => Token::Open {
            name,
            arg_string: args,
            span,
        },
    };
    Some(token)
}

/// `</name>`, with nothing between the name and `>`. `after_slash` is the source just
/// past `</`.
fn scan_close_tag<'src>(source: &'src str, offset: usize, after_slash: &'src str) -> Option<Token<'src>> {
    let name_len = tag_name_len(after_slash);
    if name_len == 0 || after_slash.as_bytes().get(name_len) != Some(&b'>') {
        return None;
    }
    let name_start = offset + 2;
    Some(Token::Close {
        name: &source[name_start..name_start + name_len],
        span: Span::new(offset, name_start + name_len + 1),
    })
}

/// Length in bytes of the tag name at the start of `s`, or 0 if there is none.
///
/// A name is an ASCII letter followed by ASCII letters, digits, `_` or `-`.
fn tag_name_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    1 + bytes[1..]
        .iter()
        .take_while(|&&b| is_tag_name_byte(b))
        .count()
}

#[inline]
fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// A tokenizer that splits markup into tags and text runs.
///
/// The tokenizer owns the scan cursor; it only ever moves forward, and every call to
/// [`Tokenizer::next_token`] that returns a token moves it by at least one byte.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    /// The source text being tokenized.
    source: &'src str,
    /// Current byte position in `source`.
    pos: usize,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// The source text being tokenized.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Get the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Get the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if self.is_eof() {
            return None;
        }

        let token = match scan_tag(self.source, self.pos) {
            Some(tag) => tag,
            None => self.text_run(),
        };
        self.pos = token.span().end;
        trace!("Token {:?} at {:?}", token.kind(), token.span());
        Some(token)
    }

    /// The text run from the cursor up to the next `<` strictly after it.
    ///
    /// Starting the search one byte ahead means a `<` that failed to start a tag is
    /// folded into the run instead of stalling the cursor.
    fn text_run(&self) -> Token<'src> {
        let start = self.pos;
        let end = self.source.as_bytes()[start + 1..]
            .iter()
            .position(|&b| b == b'<')
            .map_or(self.source.len(), |i| start + 1 + i);
        Token::Text {
            text: &self.source[start..end],
            span: Span::new(start, end),
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    fn tokenize(source: &str) -> Vec<(TokenKind, &str)> {
        laxml_testhelpers::init_tracing();
        Tokenizer::new(source)
            .map(|t| (t.kind(), t.span().slice(source)))
            .collect()
    }

    #[test]
    fn test_open_tag() {
        assert_eq!(
            scan_tag("<item>", 0),
            Some(Token::Open {
                name: "item",
                arg_string: "",
                span: Span::new(0, 6),
            })
        );
    }

    #[test]
    fn test_open_tag_with_args() {
        assert_eq!(
            scan_tag(r#"<item  id="1"  >"#, 0),
            Some(Token::Open {
                name: "item",
                arg_string: r#"id="1""#,
                span: Span::new(0, 16),
            })
        );
    }

    #[test]
    fn test_self_closing_tag() {
        assert_eq!(
            scan_tag(r#"<item id="1" />"#, 0),
            Some(Token::SelfClosing {
                name: "item",
                arg_string: r#"id="1""#,
                span: Span::new(0, 15),
            })
        );
        assert_eq!(
            scan_tag("<br/>", 0),
            Some(Token::SelfClosing {
                name: "br",
                arg_string: "",
                span: Span::new(0, 5),
            })
        );
    }

    #[test]
    fn test_slash_inside_quoted_value_is_not_self_closing() {
        let token = scan_tag(r#"<a href="/x/">"#, 0).unwrap();
        assert_eq!(token.kind(), TokenKind::Open);
    }

    #[test]
    fn test_close_tag() {
        assert_eq!(
            scan_tag("</item>", 0),
            Some(Token::Close {
                name: "item",
                span: Span::new(0, 7),
            })
        );
    }

    #[test]
    fn test_close_tag_rejects_whitespace() {
        assert_eq!(scan_tag("</item >", 0), None);
        assert_eq!(scan_tag("</ item>", 0), None);
    }

    #[test]
    fn test_scan_is_anchored() {
        assert_eq!(scan_tag("x<item>", 0), None);
        assert_eq!(scan_tag("x<item>", 1).map(|t| t.kind()), Some(TokenKind::Open));
        assert_eq!(scan_tag(" <item>", 0), None);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(scan_tag("<a-b_c9>", 0).and_then(|t| t.name()), Some("a-b_c9"));
        assert_eq!(scan_tag("<9a>", 0), None);
        assert_eq!(scan_tag("<_a>", 0), None);
        assert_eq!(scan_tag("<>", 0), None);
        assert_eq!(scan_tag("</>", 0), None);
    }

    #[test]
    fn test_unterminated_tag() {
        assert_eq!(scan_tag("<item id=\"1\"", 0), None);
        assert_eq!(scan_tag("</item", 0), None);
    }

    #[test]
    fn test_out_of_range_offset() {
        assert_eq!(scan_tag("<a>", 3), None);
        assert_eq!(scan_tag("<a>", 10), None);
        assert_eq!(scan_tag("é<a>", 1), None);
    }

    #[test]
    fn test_tag_spanning_lines() {
        let source = "<item\n  id=\"1\"\n>";
        assert_eq!(
            scan_tag(source, 0),
            Some(Token::Open {
                name: "item",
                arg_string: "id=\"1\"",
                span: Span::new(0, source.len()),
            })
        );
    }

    #[test]
    fn test_tokenize_mixed() {
        assert_eq!(
            tokenize("<p>Some text <b>bold</b> more</p>"),
            vec![
                (TokenKind::Open, "<p>"),
                (TokenKind::Text, "Some text "),
                (TokenKind::Open, "<b>"),
                (TokenKind::Text, "bold"),
                (TokenKind::Close, "</b>"),
                (TokenKind::Text, " more"),
                (TokenKind::Close, "</p>"),
            ]
        );
    }

    #[test]
    fn test_stray_angle_bracket_joins_text() {
        assert_eq!(
            tokenize("<a>1 < 2</a>"),
            vec![
                (TokenKind::Open, "<a>"),
                (TokenKind::Text, "1 "),
                (TokenKind::Text, "< 2"),
                (TokenKind::Close, "</a>"),
            ]
        );
        assert_eq!(tokenize("<<a>"), vec![(TokenKind::Text, "<"), (TokenKind::Open, "<a>")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            tokenize("<a>héllo</a>"),
            vec![
                (TokenKind::Open, "<a>"),
                (TokenKind::Text, "héllo"),
                (TokenKind::Close, "</a>"),
            ]
        );
    }
}
