//! Byte ranges into the markup source.

use std::ops::Range;

/// A byte range in the source text, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The source text covered by this span.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Narrow the span to its text with surrounding whitespace removed.
    ///
    /// `text` must be the text this span covers. All-whitespace text gives an empty
    /// span where the whitespace ends.
    pub fn trimmed(self, text: &str) -> Span {
        let start = self.start + (text.len() - text.trim_start().len());
        Span::new(start, start + text.trim().len())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        let source = "<a>  hello world \n</a>";
        let span = Span::new(3, 18);
        assert_eq!(span.slice(source), "  hello world \n");
        let trimmed = span.trimmed(span.slice(source));
        assert_eq!(trimmed, Span::new(5, 16));
        assert_eq!(trimmed.slice(source), "hello world");
    }

    #[test]
    fn test_trimmed_blank() {
        assert_eq!(Span::new(4, 7).trimmed("   "), Span::new(7, 7));
    }

    #[test]
    fn test_range_conversion() {
        let range: Range<usize> = Span::from(2..9).into();
        assert_eq!(range, 2..9);
    }
}
